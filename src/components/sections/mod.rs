pub mod about;
pub mod areas;
pub mod features;
pub mod hero;
pub mod software;

pub use about::About;
pub use areas::Areas;
pub use features::{FeatureCard, Features};
pub use hero::Hero;
pub use software::Software;
