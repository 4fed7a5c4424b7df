mod header;
mod navigation;
mod notice_banner;
mod prediction_card;
mod report_card;
mod stat_card;

pub use header::Header;
pub use navigation::{MobileNav, NavTabs};
pub use notice_banner::NoticeBanner;
pub use prediction_card::PredictionCard;
pub use report_card::ReportCard;
pub use stat_card::StatCard;
