use std::fs;
use std::path::PathBuf;

use approx::assert_relative_eq;
use biomass_furnace_toolbox::analysis::SweepVariable;
use biomass_furnace_toolbox::app::{load_catalog, operating_inputs};
use biomass_furnace_toolbox::combustion::{
    evaluate, CatalogError, FuelCatalog, FuelComposition, OperatingInputs, UltimateAnalysis,
};
use biomass_furnace_toolbox::config::{self, Config};
use biomass_furnace_toolbox::run::{RunError, RunRequest};
use biomass_furnace_toolbox::ui_cli::OperatingArgs;
use biomass_furnace_toolbox::units::{
    convert_energy, convert_temperature, load_to_gj_per_hour, EnergyUnit, TemperatureUnit,
};

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("bft_{}_{}", std::process::id(), name))
}

const EXTRA_FUELS: &str = r#"
[[fuel]]
name = "Palm Kernel Shell"
carbon = 0.48
hydrogen = 0.06
oxygen = 0.38
nitrogen = 0.004
sulfur = 0.001
ash = 0.03
hhv_mj_per_kg = 18.5
cost_per_tonne = 65.0

[[fuel]]
name = "wood chips"
carbon = 0.50
hydrogen = 0.06
oxygen = 0.43
nitrogen = 0.002
sulfur = 0.001
ash = 0.01
hhv_mj_per_kg = 19.5
cost_per_tonne = 80.0
"#;

#[test]
fn builtin_catalog_has_three_fuels_in_order() {
    let catalog = FuelCatalog::builtin();
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.names(), vec!["Rice Husk", "Wood Chips", "Sugarcane Bagasse"]);
    let wood = catalog.get("  wood CHIPS ").expect("case-insensitive lookup");
    assert_eq!(wood.hhv_mj_per_kg, 19.5);
    assert_eq!(wood.analysis.carbon, 0.50);
    assert!(catalog.get("Coal").is_none());
}

#[test]
fn catalog_reads_toml_and_merges_over_builtin() {
    let extra = FuelCatalog::from_toml_str(EXTRA_FUELS).expect("parse catalog");
    assert_eq!(extra.len(), 2);
    let pks = extra.get("palm kernel shell").expect("pks");
    assert_eq!(pks.analysis.ash, 0.03);

    let merged = FuelCatalog::builtin().merge(extra);
    assert_eq!(merged.len(), 4);
    assert_eq!(merged.get("Wood Chips").map(|f| f.cost_per_tonne), Some(80.0));
    assert_eq!(merged.names()[3], "Palm Kernel Shell");
}

#[test]
fn catalog_rejects_invalid_entries() {
    let dup = format!("{EXTRA_FUELS}\n{}", EXTRA_FUELS.replace("wood chips", "Other"));
    assert!(matches!(
        FuelCatalog::from_toml_str(&dup),
        Err(CatalogError::DuplicateName(name)) if name == "Palm Kernel Shell"
    ));

    let bad = |fuel: FuelComposition| FuelCatalog::from_fuels(vec![fuel]);
    let analysis = UltimateAnalysis::new(0.5, 0.06, 0.43, 0.002, 0.001, 0.01);
    assert!(matches!(
        bad(FuelComposition::new(" ", analysis, 19.5, 50.0)),
        Err(CatalogError::EmptyName)
    ));
    assert!(matches!(
        bad(FuelComposition::new("x", analysis, 0.0, 50.0)),
        Err(CatalogError::InvalidHhv { .. })
    ));
    assert!(matches!(
        bad(FuelComposition::new("x", analysis, 19.5, -1.0)),
        Err(CatalogError::InvalidCost { .. })
    ));
    let over = UltimateAnalysis::new(1.5, 0.06, 0.43, 0.002, 0.001, 0.01);
    assert!(matches!(
        bad(FuelComposition::new("x", over, 19.5, 50.0)),
        Err(CatalogError::FractionOutOfRange { element: "C", .. })
    ));
    assert!(matches!(
        FuelCatalog::from_toml_str("[[fuel]]\nname = 3\n"),
        Err(CatalogError::Parse(_))
    ));
}

#[test]
fn run_request_resolves_fuel_from_catalog() {
    let catalog = FuelCatalog::builtin();
    let inputs = OperatingInputs::default();
    let record = RunRequest::new("base", "Wood Chips", inputs)
        .execute(&catalog)
        .expect("run");
    assert_eq!(record.fuel.name, "Wood Chips");
    assert_relative_eq!(
        record.result.efficiency_percent,
        79.159_465_720_836_41,
        max_relative = 1e-6
    );
    assert_eq!(record.recompute(), record.result);

    let missing = RunRequest::new("x", "Peat", inputs).execute(&catalog);
    assert_eq!(missing, Err(RunError::FuelNotFound("Peat".to_string())));
}

#[test]
fn run_record_keeps_fuel_snapshot() {
    let mut catalog = FuelCatalog::builtin();
    let record = RunRequest::new("snap", "Rice Husk", OperatingInputs::default())
        .execute(&catalog)
        .expect("run");
    let cheaper = FuelCatalog::from_fuels(vec![FuelComposition::new(
        "Rice Husk",
        UltimateAnalysis::new(0.35, 0.04, 0.40, 0.005, 0.005, 0.20),
        16.0,
        10.0,
    )])
    .expect("catalog");
    catalog = catalog.merge(cheaper);
    assert_eq!(catalog.get("Rice Husk").map(|f| f.cost_per_tonne), Some(10.0));
    assert_eq!(record.fuel.cost_per_tonne, 50.0);
    assert_eq!(record.recompute(), record.result);
}

#[test]
fn partial_config_fills_defaults() {
    let cfg: Config = toml::from_str(
        r#"
[defaults]
fuel = "Rice Husk"
moisture_percent = 20.0

[sweep]
variable = "ExcessAirPercent"
steps = 25
"#,
    )
    .expect("parse config");
    assert_eq!(cfg.defaults.fuel, "Rice Husk");
    assert_eq!(cfg.defaults.moisture_percent, 20.0);
    assert_eq!(cfg.defaults.excess_air_percent, 30.0);
    assert_eq!(cfg.sweep.variable, SweepVariable::ExcessAirPercent);
    assert_eq!(cfg.sweep.steps, 25);
    assert_eq!(cfg.sweep.end, 50.0);
    assert_eq!(cfg.display.temperature, TemperatureUnit::Celsius);
    assert_eq!(cfg.validation.delimiter, ',');
    assert!(cfg.catalog_path.is_none());
}

#[test]
fn config_round_trips_through_file() {
    let path = scratch_path("config.toml");
    let _ = fs::remove_file(&path);

    let created = config::load_or_default(&path).expect("create default");
    assert_eq!(created, Config::default());
    assert!(path.exists());

    let mut cfg = created;
    cfg.defaults.fuel = "Sugarcane Bagasse".to_string();
    cfg.display.load_energy = EnergyUnit::KilowattHour;
    cfg.catalog_path = Some(PathBuf::from("fuels.toml"));
    cfg.save(&path).expect("save");

    let loaded = config::load(&path).expect("reload");
    assert_eq!(loaded, cfg);
    let _ = fs::remove_file(&path);
}

#[test]
fn configured_catalog_file_is_merged() {
    let catalog_path = scratch_path("fuels.toml");
    fs::write(&catalog_path, EXTRA_FUELS).expect("write catalog");
    let cfg = Config {
        catalog_path: Some(catalog_path.clone()),
        ..Config::default()
    };
    let catalog = load_catalog(&cfg).expect("load catalog");
    assert_eq!(catalog.len(), 4);
    assert!(catalog.get("Palm Kernel Shell").is_some());
    let _ = fs::remove_file(&catalog_path);

    let missing = Config {
        catalog_path: Some(scratch_path("absent.toml")),
        ..Config::default()
    };
    assert!(matches!(load_catalog(&missing), Err(CatalogError::Io(_))));
}

#[test]
fn operating_inputs_fall_back_to_config_and_convert_load() {
    let mut cfg = Config::default();
    cfg.display.load_energy = EnergyUnit::KilowattHour;
    cfg.defaults.furnace_load_per_hour = 1000.0;

    let from_config = operating_inputs(&cfg, &OperatingArgs::default());
    assert_eq!(from_config.moisture_percent, 10.0);
    assert_eq!(from_config.excess_air_percent, 30.0);
    assert_relative_eq!(from_config.furnace_load_gj_per_hour, 3.6, max_relative = 1e-12);

    let args = OperatingArgs {
        moisture: Some(25.0),
        load: Some(2.0),
        load_unit: Some(EnergyUnit::Gigajoule),
        ..OperatingArgs::default()
    };
    let overridden = operating_inputs(&cfg, &args);
    assert_eq!(overridden.moisture_percent, 25.0);
    assert_eq!(overridden.furnace_load_gj_per_hour, 2.0);
}

#[test]
fn load_unit_changes_cost_but_not_efficiency() {
    let fuel = FuelCatalog::builtin().get("Wood Chips").cloned().expect("wood");
    let gj = evaluate(&fuel, OperatingInputs::new(10.0, 30.0, 1.0));
    let load = load_to_gj_per_hour(1000.0 / 3.6, EnergyUnit::KilowattHour);
    let kwh = evaluate(&fuel, OperatingInputs::new(10.0, 30.0, load));
    assert_eq!(gj.efficiency_percent, kwh.efficiency_percent);
    assert_relative_eq!(gj.cost_per_hour, kwh.cost_per_hour, max_relative = 1e-9);
}

#[test]
fn unit_conversions() {
    assert_relative_eq!(
        convert_energy(1.0, EnergyUnit::MillionBtu, EnergyUnit::Gigajoule),
        1.055_06
    );
    assert_relative_eq!(
        convert_energy(3.6, EnergyUnit::Gigajoule, EnergyUnit::KilowattHour),
        1000.0,
        max_relative = 1e-12
    );
    assert_eq!(convert_energy(2.5, EnergyUnit::Megajoule, EnergyUnit::Megajoule), 2.5);
    assert_eq!(EnergyUnit::KilowattHour.symbol(), "kWh");
    assert_eq!(EnergyUnit::MillionBtu.symbol(), "MMBtu");
    assert_relative_eq!(
        convert_temperature(250.0, TemperatureUnit::Celsius, TemperatureUnit::Kelvin),
        523.15,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        convert_temperature(100.0, TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit),
        212.0,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        convert_temperature(32.0, TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius),
        0.0,
        epsilon = 1e-9
    );
}
