#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use rbells::config::Preset;
use rbells::core::week::WeekSchedule;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rbells() -> Command {
    let mut cmd = cargo_bin_cmd!("rbells");
    cmd.env_remove("RBELLS_LOG");
    cmd
}

/// Unique path inside the system temp dir, any existing file removed
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rbells.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `body` to a fresh temp config file and return its path
pub fn write_config(name: &str, ext: &str, body: &str) -> String {
    let p = temp_path(name, ext);
    fs::write(&p, body).expect("write config");
    p
}

pub fn standard_week() -> WeekSchedule {
    WeekSchedule::from_config(&Preset::Standard.config()).expect("standard preset builds")
}

/// 2026-10-18 is a Sunday, 2026-10-19 a Monday
pub fn at(day: u32, h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, day)
        .and_then(|d| d.and_hms_opt(h, m, s))
        .expect("valid date-time")
}
