pub mod mockito;

use crate::TestSetup;

impl TestSetup {
    pub fn identity<'a>(&'a mut self) -> IdentityFixtures<'a> {
        IdentityFixtures { setup: self }
    }
}

pub struct IdentityFixtures<'a> {
    setup: &'a mut TestSetup,
}
