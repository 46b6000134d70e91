use proptest::prelude::*;
use slr_catalog::Catalog;
use slr_core::{LengthUnit, SlrError};
use slr_model::{Projection, ProjectionMode, ScenarioCollection, UnitsSummary};

fn collection(identifier: &str) -> ScenarioCollection {
    let catalog = Catalog::builtin().expect("builtin catalog");
    ScenarioCollection::from_catalog(&catalog, identifier).expect("collection")
}

#[test]
fn san_francisco_projects_at_exact_sample() {
    let sf = collection("San Francisco, CA");
    assert_eq!(sf.len(), 3);
    assert_eq!(sf.units_summary(), UnitsSummary::Uniform(LengthUnit::Foot));

    let row = sf.row_at(2050.0, ProjectionMode::Strict).expect("row");
    assert_eq!(row.get("Low Risk Aversion"), Some(1.1));
    assert_eq!(row.get("Extreme Risk Aversion"), Some(2.7));
    assert_eq!(row.name, "SLR at San Francisco, CA by 2050 [ft]");
}

#[test]
fn new_jersey_interpolates_between_samples() {
    let nj = collection("8531680");
    let row = nj.row_at(2060.0, ProjectionMode::Strict).expect("row");
    let central = row.get("Central (50%)").expect("central value");
    assert!((central - 1.8).abs() < 1e-9);
}

#[test]
fn horizon_before_coverage_fails_strictly() {
    let nyc = collection("NPCC3-new-york-2019");
    let err = nyc
        .project_at(2010.0, false, ProjectionMode::Strict)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Target year 2010 is out of bounds; years range from 2020 to 2100"
    );
}

#[test]
fn merged_projection_adds_one_row() {
    let nj = collection("nj-dep-2021");
    let plain = nj.tabular_view();
    let merged = match nj.project_at(2040.0, true, ProjectionMode::Strict) {
        Ok(Projection::Table(table)) => table,
        other => panic!("expected a table, got {other:?}"),
    };
    assert_eq!(merged.len(), plain.len() + 1);
    assert_eq!(merged.years()[1], 2040.0);
    assert_eq!(merged.index_label(), "Year (baseline: 2000)");
}

#[test]
fn column_labels_carry_probability() {
    let sf = collection("cocat-2018-9414290");
    let table = sf.tabular_view();
    assert_eq!(
        table.columns(),
        &[
            "Low Risk Aversion, 83.00% [ft]".to_string(),
            "Medium-High Risk Aversion, 99.50% [ft]".to_string(),
            "Extreme Risk Aversion [ft]".to_string(),
        ]
    );
}

#[test]
fn converted_copy_leaves_catalog_collection_untouched() {
    let nyc = collection("New York City, NY");
    let before: Vec<Vec<u64>> = nyc
        .iter()
        .map(|s| s.series().y().iter().map(|v| v.to_bits()).collect())
        .collect();

    let metric = nyc.converted(LengthUnit::Centimeter);

    let after: Vec<Vec<u64>> = nyc
        .iter()
        .map(|s| s.series().y().iter().map(|v| v.to_bits()).collect())
        .collect();
    assert_eq!(before, after);
    assert_eq!(nyc.units_summary(), UnitsSummary::Uniform(LengthUnit::Inch));

    let median = metric.find("50th percentile").expect("median");
    assert!((median.series().y()[3] - 36.0 * 2.54).abs() < 1e-9);
}

#[test]
fn mixed_units_block_single_unit_reporting() {
    let catalog = Catalog::builtin().expect("builtin catalog");
    let nyc = ScenarioCollection::from_catalog(&catalog, "New York City, NY").expect("nyc");
    let sf = ScenarioCollection::from_catalog(&catalog, "San Francisco, CA").expect("sf");

    let mut scenarios: Vec<_> = sf.scenarios().iter().take(2).cloned().collect();
    scenarios.push(nyc.item_at(0).expect("first").clone());
    let mixed = ScenarioCollection::new(scenarios, "Bay", "0", "combined", None);

    let summary = mixed.units_summary();
    assert_eq!(
        summary,
        UnitsSummary::Mixed(vec![LengthUnit::Foot, LengthUnit::Foot, LengthUnit::Inch])
    );
    assert!(matches!(
        mixed.single_unit(),
        Err(SlrError::MixedUnitsAmbiguous { .. })
    ));
}

proptest! {
    #[test]
    fn lenient_rows_cover_every_scenario(year in 1990.0f64..2150.0) {
        let nj = collection("nj-dep-2021");
        let row = nj.row_at(year, ProjectionMode::Lenient).unwrap();
        prop_assert_eq!(row.values.len(), nj.len());
        let inside = (2030.0..=2100.0).contains(&year);
        prop_assert_eq!(row.values.iter().all(|(_, v)| v.is_some()), inside);
    }
}
