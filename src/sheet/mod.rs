//! Host sheet surface: reading selections and presenting results

pub mod presenter;
pub mod reader;

pub use presenter::{
    CsvPresenter, JsonPresenter, OutputFormat, Presenter, TextTablePresenter, presenter_for,
};
pub use reader::{CsvGridSource, InputSource, SelectedSource, Selection};
