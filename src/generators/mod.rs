pub mod rust;

use crate::PageRoute;

pub trait CodeGenerator {
    type Config;
    type Output;

    fn generate(
        routes: &[PageRoute],
        config: &Self::Config,
    ) -> Result<Self::Output, Box<dyn std::error::Error>>;
}
