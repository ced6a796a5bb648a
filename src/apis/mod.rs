pub mod surf_report;

pub use surf_report::SurfReportClient;
