/// Plain-text point and plane reader/writer module.
pub mod text;
