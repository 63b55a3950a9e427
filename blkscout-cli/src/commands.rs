use std::process::ExitCode;

use anyhow::Result;
use clap::CommandFactory;

use blkscout_core::{devname, format, liveboot, Config, Engine, Inventory, LsblkInventory};

use crate::cli::{Cli, Command};

const EXIT_OK: u8 = 0;
const EXIT_NEGATIVE: u8 = 1;

pub fn run(cli: &Cli) -> Result<ExitCode> {
    let config = build_config(cli)?;
    let inventory = LsblkInventory::new();
    let engine = Engine::new(&inventory, &config);

    let code = match &cli.command {
        None => match &cli.device {
            Some(device) => {
                let root = devname::decompose(device).root;
                inventory.ensure_block_device(&root)?;
                let parts = engine.partitions(Some(&root))?;
                print!("{}", format::render_partitions(&parts, &config));
                EXIT_OK
            }
            None => {
                Cli::command().print_help()?;
                return Ok(ExitCode::from(2));
            }
        },
        Some(Command::All) => {
            let parts = engine.partitions(None)?;
            print!("{}", format::render_partitions(&parts, &config));
            EXIT_OK
        }
        Some(Command::Drives) => {
            let drives = engine.drives()?;
            print!("{}", format::render_drives(&drives, &config));
            EXIT_OK
        }
        Some(Command::Swap) => {
            let parts = engine.swap_partitions()?;
            print!("{}", format::render_partitions(&parts, &config));
            EXIT_OK
        }
        Some(Command::IsLinux { device }) => {
            if engine.is_linux(device)? {
                EXIT_OK
            } else {
                EXIT_NEGATIVE
            }
        }
        Some(Command::SplitDevice { device }) => {
            let split = devname::decompose(device);
            match &split.partition {
                Some(num) => {
                    println!("{} {num}", split.root);
                    EXIT_OK
                }
                None => {
                    println!("{}", split.root);
                    EXIT_NEGATIVE
                }
            }
        }
        Some(Command::FindEsp { device }) => match engine.find_esp(device)? {
            Some(esp) => {
                println!("{esp}");
                EXIT_OK
            }
            None => EXIT_NEGATIVE,
        },
    };
    Ok(ExitCode::from(code))
}

fn build_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::default();
    if let Some(list) = &cli.major_num {
        config.major_numbers = Config::parse_major_numbers(list)?;
    }
    if let Some(list) = &cli.exclude {
        config.apply_exclusions(list)?;
    }
    config.min_size_mb = cli.min_size;
    config.show_header = !cli.noheadings;
    config.tab_delimited = cli.tabs;
    config.dev_prefixed = cli.dev_output;
    config.full_fields = cli.full;
    config.simplify_fs_names = cli.simplify && !cli.raw;

    // The live-boot descriptor is only consulted when boot exclusion is on.
    if config.exclude_boot {
        config.live_boot_uuid = liveboot::boot_uuid();
        if config.live_boot_uuid.is_none() {
            log::debug!("boot exclusion requested but no live-boot UUID found");
        }
    }
    Ok(config)
}
