//! SeaORM entities for the content and theme association tables

pub mod sermon;
pub mod sermon_series;
pub mod sermon_theme;
pub mod series_theme;
pub mod theme;

pub use sermon::Entity as Sermon;
pub use sermon_series::Entity as SermonSeries;
pub use sermon_theme::Entity as SermonTheme;
pub use series_theme::Entity as SeriesTheme;
pub use theme::Entity as Theme;
