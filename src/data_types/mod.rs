pub mod axis;
pub mod color;
pub mod datasource;
pub mod plot_configs;
pub mod series;
pub mod view;

pub use axis::*;
pub use color::*;
pub use datasource::*;
pub use plot_configs::*;
pub use series::*;
pub use view::*;
