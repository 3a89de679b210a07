mod report;

pub use report::write_roster_report;
