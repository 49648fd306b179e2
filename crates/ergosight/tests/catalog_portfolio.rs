use ergosight::workflows::catalog::{AnthroProfile, CatalogError, RatingBand, VehicleCatalog};

#[test]
fn portfolio_summary_reflects_fixed_lineup() {
    let catalog = VehicleCatalog::standard();
    let summary = catalog.portfolio_summary();

    assert_eq!(summary.model_coverage, 6);
    assert_eq!(summary.at_risk_count, 0);
    assert!((summary.average_rating - 44.8 / 6.0).abs() < 1e-9);

    let best = summary.best_performer.expect("best performer");
    assert_eq!(best.id, "xuv700");
    assert_eq!(best.avg_rating, 8.4);
}

#[test]
fn worst_for_seniors_matches_copilot_table() {
    let catalog = VehicleCatalog::standard();
    let names: Vec<_> = catalog
        .worst_for(AnthroProfile::Senior, 3)
        .into_iter()
        .map(|vehicle| vehicle.name)
        .collect();

    // Thar and Bolero tie at 5.7; catalog order breaks the tie.
    assert_eq!(names, vec!["Thar", "Bolero", "XUV300"]);
}

#[test]
fn heatmap_bands_every_profile() {
    let catalog = VehicleCatalog::standard();
    let heatmap = catalog.heatmap();
    assert_eq!(heatmap.len(), catalog.vehicles().len());

    let thar = heatmap
        .iter()
        .find(|row| row.vehicle == "Thar")
        .expect("thar row");
    let profiles: Vec<_> = thar.cells.iter().map(|cell| cell.profile).collect();
    assert_eq!(profiles, AnthroProfile::ordered().to_vec());

    let senior = thar
        .cells
        .iter()
        .find(|cell| cell.profile == AnthroProfile::Senior)
        .expect("senior cell");
    assert_eq!(senior.rating, 5.7);
    assert_eq!(senior.band, RatingBand::AtRisk);
}

#[test]
fn vehicle_lookup_is_case_insensitive() {
    let catalog = VehicleCatalog::standard();
    assert_eq!(catalog.require("XUV700").map(|v| v.name), Ok("XUV700"));
    assert_eq!(catalog.geometry("xuv300").len(), 6);
    assert!(catalog.geometry("thar").is_empty());
    assert!(!catalog.contributions("xuv700").is_empty());

    assert_eq!(
        catalog.require("nexon").map(|v| v.name),
        Err(CatalogError::UnknownVehicle {
            id: "nexon".to_string()
        })
    );
}

#[test]
fn profiles_parse_from_codes_and_labels() {
    assert_eq!("p95m".parse::<AnthroProfile>(), Ok(AnthroProfile::P95Male));
    assert_eq!("Senior 65+".parse::<AnthroProfile>(), Ok(AnthroProfile::Senior));
    assert!("P99".parse::<AnthroProfile>().is_err());
}
