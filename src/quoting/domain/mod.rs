pub mod configuration;
pub mod labor_hours;
pub mod option_group;
pub mod product_option;
pub mod quote;
pub mod quote_metadata;
pub mod selections;

pub use configuration::{Catalog, ConfigurationRecord, ConfigurationTag};
pub use labor_hours::{LaborCategory, LaborHours};
pub use option_group::{OptionGroup, OptionGroupKind};
pub use product_option::ProductOption;
pub use quote::{LaborLine, OptionLine, Quote, QuoteRow};
pub use quote_metadata::QuoteMetadata;
pub use selections::Selections;
