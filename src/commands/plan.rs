//! Provisioning plan command - file count, file layout, and space validation
//!
//! Builds the complete plan for one database from a configuration file:
//! how many data files to create, their logical names and physical paths,
//! and how much space each drive needs with the safety margin applied.
//! Validation compares requirements against operator-supplied free-space
//! figures only; this tool never queries real disks.

use anyhow::{Result, bail};
use serde::Serialize;
use sizing::{
    DEFAULT_MARGIN, MAX_DATA_FILES, SizeValue, SpaceRequirement, optimal_file_count,
    required_space,
};
use std::collections::BTreeMap;

use crate::Context;
use crate::cli::PlanArgs;
use crate::config::PlanConfig;
use crate::ui;

/// A single planned database file
#[derive(Debug, Serialize)]
pub struct PlannedFile {
    pub logical_name: String,
    pub physical_path: String,
    pub initial_size: SizeValue,
    pub growth: SizeValue,
}

/// Complete provisioning plan for one database
#[derive(Debug, Serialize)]
pub struct ProvisioningPlan {
    pub sql_instance: String,
    pub database: String,
    pub data_drive: String,
    pub log_drive: String,
    /// Data files, all on the PRIMARY filegroup
    pub data_files: Vec<PlannedFile>,
    pub log_file: PlannedFile,
    pub space: SpaceRequirement,
}

/// Result of comparing one drive's requirement against its free space
#[derive(Debug, Serialize)]
pub struct DriveCheck {
    pub drive: String,
    pub required: SizeValue,
    pub available: SizeValue,
    pub sufficient: bool,
}

/// Run the plan command
pub fn run(ctx: &Context, args: PlanArgs) -> Result<()> {
    let config = PlanConfig::load(&args.config)?;
    let plan = build_plan(&config)?;
    let (checks, unchecked) = check_drives(&config, &plan.space);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        if !ctx.quiet {
            print_plan(&plan);
            if ctx.verbose > 0 {
                ui::dim(&format!("margin factor {DEFAULT_MARGIN}"));
            }
        }
        print_checks(&checks, &unchecked);
    }

    let short: Vec<&DriveCheck> = checks.iter().filter(|c| !c.sufficient).collect();
    if !short.is_empty() {
        let drives: Vec<&str> = short.iter().map(|c| c.drive.as_str()).collect();
        bail!("insufficient space on drive(s): {}", drives.join(", "));
    }
    Ok(())
}

/// Build the provisioning plan from validated configuration
pub fn build_plan(config: &PlanConfig) -> Result<ProvisioningPlan> {
    let db = &config.database;
    let sizes = &config.file_sizes;

    let count = optimal_file_count(db.expected_size, sizes.threshold, MAX_DATA_FILES)?;
    let space = required_space(count, sizes.data_size, sizes.log_size, DEFAULT_MARGIN)?;
    log::debug!(
        "{}: {count} data file(s) for {} at {} per file",
        db.name,
        db.expected_size,
        sizes.threshold
    );

    let data_drive = db.data_drive.to_uppercase();
    let log_drive = db.log_drive.to_uppercase();
    let data_dir = format!("{data_drive}:\\Data\\{}", db.name);

    let mut data_files = Vec::with_capacity(count as usize);
    for n in 1..=count {
        // first file is the .mdf carrying the database name, the rest are .ndf
        let (logical_name, file_name) = if n == 1 {
            (db.name.clone(), format!("{}.mdf", db.name))
        } else {
            (format!("{}_{n}", db.name), format!("{}_{n}.ndf", db.name))
        };
        data_files.push(PlannedFile {
            logical_name,
            physical_path: format!("{data_dir}\\{file_name}"),
            initial_size: sizes.data_size,
            growth: sizes.data_growth,
        });
    }

    let log_file = PlannedFile {
        logical_name: format!("{}_log", db.name),
        physical_path: format!("{log_drive}:\\Logs\\{}\\{}_log.ldf", db.name, db.name),
        initial_size: sizes.log_size,
        growth: sizes.log_growth,
    };

    Ok(ProvisioningPlan {
        sql_instance: config.sql_instance.clone(),
        database: db.name.clone(),
        data_drive,
        log_drive,
        data_files,
        log_file,
        space,
    })
}

/// Compare per-drive requirements against configured free-space figures
///
/// Requirements for drives that host both data and log files are summed
/// before the comparison. Returns the checks performed plus the drives that
/// had no free-space figure configured.
pub fn check_drives(
    config: &PlanConfig,
    space: &SpaceRequirement,
) -> (Vec<DriveCheck>, Vec<String>) {
    let mut required: BTreeMap<String, u64> = BTreeMap::new();
    *required
        .entry(config.database.data_drive.to_uppercase())
        .or_insert(0) += space.data.bytes();
    *required
        .entry(config.database.log_drive.to_uppercase())
        .or_insert(0) += space.log.bytes();

    let available: BTreeMap<String, SizeValue> = config
        .available_space
        .iter()
        .map(|(drive, size)| (drive.to_uppercase(), *size))
        .collect();

    let mut checks = Vec::new();
    let mut unchecked = Vec::new();
    for (drive, bytes) in required {
        match available.get(&drive) {
            Some(avail) => checks.push(DriveCheck {
                drive,
                required: SizeValue::from_bytes(bytes),
                available: *avail,
                sufficient: bytes <= avail.bytes(),
            }),
            None => unchecked.push(drive),
        }
    }
    (checks, unchecked)
}

fn print_plan(plan: &ProvisioningPlan) {
    ui::header(&format!("Provisioning plan: {}", plan.database));
    ui::kv("Instance", &plan.sql_instance);
    ui::kv("Data files", &plan.data_files.len().to_string());

    ui::section("Data files (PRIMARY filegroup)");
    for file in &plan.data_files {
        ui::kv(
            &file.logical_name,
            &format!(
                "{} ({}, grow {})",
                file.physical_path, file.initial_size, file.growth
            ),
        );
    }

    ui::section("Log file");
    ui::kv(
        &plan.log_file.logical_name,
        &format!(
            "{} ({}, grow {})",
            plan.log_file.physical_path, plan.log_file.initial_size, plan.log_file.growth
        ),
    );

    ui::section("Space requirements (10% margin)");
    ui::kv(
        &format!("Drive {} (data)", plan.data_drive),
        &ui::format_size(plan.space.data.bytes()),
    );
    ui::kv(
        &format!("Drive {} (log)", plan.log_drive),
        &ui::format_size(plan.space.log.bytes()),
    );
    ui::kv("Total", &ui::format_size(plan.space.total.bytes()));
}

fn print_checks(checks: &[DriveCheck], unchecked: &[String]) {
    ui::section("Disk space validation");
    for check in checks {
        let line = format!(
            "drive {}: requires {}, {} available",
            check.drive,
            ui::format_size(check.required.bytes()),
            ui::format_size(check.available.bytes()),
        );
        if check.sufficient {
            ui::success(&line);
        } else {
            ui::warn(&line);
        }
    }
    for drive in unchecked {
        ui::dim(&format!(
            "drive {drive}: no free-space figure configured, skipped"
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(toml_str: &str) -> PlanConfig {
        toml::from_str(toml_str).unwrap()
    }

    const BASE: &str = r#"
sql_instance = "SQL01"

[database]
name = "Orders"
data_drive = "g"
log_drive = "L"
expected_size = "50GB"

[file_sizes]
data_size = "200MB"
data_growth = "100MB"
log_size = "100MB"
log_growth = "100MB"
threshold = "10GB"
"#;

    #[test]
    fn test_plan_file_layout() {
        let plan = build_plan(&config(BASE)).unwrap();

        assert_eq!(plan.data_files.len(), 5);
        assert_eq!(plan.data_files[0].logical_name, "Orders");
        assert_eq!(plan.data_files[0].physical_path, "G:\\Data\\Orders\\Orders.mdf");
        assert_eq!(plan.data_files[1].logical_name, "Orders_2");
        assert_eq!(
            plan.data_files[4].physical_path,
            "G:\\Data\\Orders\\Orders_5.ndf"
        );
        assert_eq!(plan.log_file.logical_name, "Orders_log");
        assert_eq!(
            plan.log_file.physical_path,
            "L:\\Logs\\Orders\\Orders_log.ldf"
        );
    }

    #[test]
    fn test_plan_space_requirements() {
        let plan = build_plan(&config(BASE)).unwrap();

        // 5 files x 200MB x 1.10 and 100MB x 1.10
        assert_eq!(plan.space.data.to_string(), "1100MB");
        assert_eq!(plan.space.log.to_string(), "110MB");
        assert_eq!(plan.space.total.to_string(), "1210MB");
    }

    #[test]
    fn test_small_database_gets_single_file() {
        let plan = build_plan(&config(&BASE.replace("50GB", "5GB"))).unwrap();
        assert_eq!(plan.data_files.len(), 1);
        assert_eq!(plan.data_files[0].physical_path, "G:\\Data\\Orders\\Orders.mdf");
    }

    #[test]
    fn test_file_count_cap_applies() {
        let plan = build_plan(&config(&BASE.replace("50GB", "100GB"))).unwrap();
        assert_eq!(plan.data_files.len(), 8);
    }

    #[test]
    fn test_check_drives_separate() {
        let toml_str = format!("{BASE}\n[available_space]\nG = \"2GB\"\nL = \"100MB\"\n");
        let config = config(&toml_str);
        let plan = build_plan(&config).unwrap();

        let (checks, unchecked) = check_drives(&config, &plan.space);
        assert!(unchecked.is_empty());
        assert_eq!(checks.len(), 2);

        // 1100MB fits in 2GB; 110MB does not fit in 100MB
        let g = checks.iter().find(|c| c.drive == "G").unwrap();
        let l = checks.iter().find(|c| c.drive == "L").unwrap();
        assert!(g.sufficient);
        assert!(!l.sufficient);
    }

    #[test]
    fn test_check_drives_sums_shared_drive() {
        let shared = BASE.replace("log_drive = \"L\"", "log_drive = \"G\"");
        let toml_str = format!("{shared}\n[available_space]\nG = \"1200MB\"\n");
        let config = config(&toml_str);
        let plan = build_plan(&config).unwrap();

        let (checks, _) = check_drives(&config, &plan.space);
        assert_eq!(checks.len(), 1);
        // data (1100MB) + log (110MB) exceeds the single 1200MB figure
        assert_eq!(checks[0].required.to_string(), "1210MB");
        assert!(!checks[0].sufficient);
    }

    #[test]
    fn test_check_drives_skips_unconfigured() {
        let config = config(BASE);
        let plan = build_plan(&config).unwrap();

        let (checks, unchecked) = check_drives(&config, &plan.space);
        assert!(checks.is_empty());
        assert_eq!(unchecked, vec!["G".to_string(), "L".to_string()]);
    }
}
