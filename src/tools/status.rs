//! Menu Planner Status Tool
//!
//! Provides runtime status information about the service.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::units::{DisplaySystem, UNIT_ALIASES};

/// Unit handling instructions for AI assistants
pub const UNIT_INSTRUCTIONS: &str = r#"
# Menu Planner Unit Instructions

## Display systems
- `original`: amounts and units are echoed exactly as entered
- `metric`: mass shows as g (1 decimal) or kg from 1000 g (2 decimals);
  volume shows as ml (1 decimal) or l from 1000 ml (2 decimals)
- `imperial`: mass shows as oz or lb from 16 oz; volume shows as fl oz or
  cup from 8 fl oz (all 2 decimals)

## Units
- Call `list_units` for every recognized label. Matching is case-insensitive
  and ignores surrounding whitespace.
- Any other label (clove, can, piece, ...) is kept as-is and never converted.

## Shopping lists
- `aggregate_quantities` merges entries of the same ingredient whose units
  share a base (e.g. 500 g + 0.5 kg = 1 kg). Different unknown labels stay
  on separate lines.
- `build_shopping_list` scales every recipe to its slot's servings first.

## Errors
- NaN or infinite amounts are rejected; zero and negative amounts are not.
"#;

/// Runtime status of the service
#[derive(Debug, Clone, Serialize)]
pub struct MenuplanStatus {
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    pub default_unit_system: DisplaySystem,
    pub unit_alias_count: usize,

    pub started_at: DateTime<Utc>,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    started_at: DateTime<Utc>,
    default_system: DisplaySystem,
}

impl StatusTracker {
    pub fn new(default_system: DisplaySystem) -> Self {
        Self {
            start_time: Instant::now(),
            started_at: Utc::now(),
            default_system,
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> MenuplanStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        MenuplanStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            default_unit_system: self.default_system,
            unit_alias_count: UNIT_ALIASES.len(),
            started_at: self.started_at,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}
