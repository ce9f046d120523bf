use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HomePageResponse {
    pub greeting: String,
    pub buttons: Vec<HomeButton>,
    pub tips: Vec<HairCareTip>,
    pub navigation: Vec<NavItem>,
}

#[derive(Debug, Serialize)]
pub struct HomeButton {
    pub text: String,
    /// "primary" or "secondary"
    pub style: String,
    pub action: String,
}

#[derive(Debug, Serialize)]
pub struct HairCareTip {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct NavItem {
    pub name: String,
    pub icon: String,
    pub is_active: bool,
}
