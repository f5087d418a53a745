mod create_family;
mod family_overview;
