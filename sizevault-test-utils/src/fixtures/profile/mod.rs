pub mod data;

use crate::TestSetup;

impl TestSetup {
    pub fn profile<'a>(&'a self) -> ProfileFixtures<'a> {
        ProfileFixtures { setup: self }
    }
}

pub struct ProfileFixtures<'a> {
    setup: &'a TestSetup,
}
