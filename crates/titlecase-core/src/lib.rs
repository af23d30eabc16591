pub mod case;
pub mod engine;
pub mod error;
pub mod fs;
pub mod line;
pub mod markup;

pub use case::title_case;
pub use engine::{
    convert, convert_reader, ConvertOptions, ConvertOutcome, ConvertRequest, Sink, Source,
};
pub use error::{ConvertError, ConvertResult, ExitCode};
pub use markup::{decorate, HeadingLevel, Markup};
