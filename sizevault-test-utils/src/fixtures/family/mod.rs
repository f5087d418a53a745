pub mod data;

use crate::TestSetup;

impl TestSetup {
    pub fn family<'a>(&'a self) -> FamilyFixtures<'a> {
        FamilyFixtures { setup: self }
    }
}

pub struct FamilyFixtures<'a> {
    setup: &'a TestSetup,
}
