/// Checked after every load and before every save.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
