pub mod alert;
pub mod campaign_banner;
pub mod confetti;
pub mod prize_showcase;
pub mod welcome_modal;

pub use alert::AlertStack;
pub use campaign_banner::CampaignBanner;
pub use confetti::Confetti;
pub use prize_showcase::PrizeShowcase;
pub use welcome_modal::WelcomeModal;
