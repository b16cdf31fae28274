pub mod behavioral;
pub mod dashboard;
pub mod home;
pub mod input_form;
pub mod profile;
pub mod qa;
pub mod quiz;
pub mod resume_analysis;
pub mod star_method;
pub mod tips;

pub use behavioral::*;
pub use dashboard::*;
pub use home::*;
pub use input_form::*;
pub use profile::*;
pub use qa::*;
pub use quiz::*;
pub use resume_analysis::*;
pub use star_method::*;
pub use tips::*;
