use axum::Json;
use serde_json::{Value, json};

use crate::models::{HairCareTip, HomeButton, HomePageResponse, NavItem};

pub async fn get_home_page() -> Json<HomePageResponse> {
    let buttons = vec![
        HomeButton {
            text: "Start New Assessment".to_string(),
            style: "primary".to_string(),
            action: "/assessment/new".to_string(),
        },
        HomeButton {
            text: "View Progress".to_string(),
            style: "secondary".to_string(),
            action: "/progress".to_string(),
        },
    ];

    let tips = vec![
        HairCareTip {
            icon: "brush_icon".to_string(),
            title: "Gentle Brushing".to_string(),
            description: "Use a wide-tooth comb to prevent breakage.".to_string(),
        },
        HairCareTip {
            icon: "shampoo_icon".to_string(),
            title: "Right Shampoo".to_string(),
            description: "Choose a shampoo that suits your hair type.".to_string(),
        },
        HairCareTip {
            icon: "conditioner_icon".to_string(),
            title: "Condition Well".to_string(),
            description: "Apply conditioner to the ends of your hair.".to_string(),
        },
    ];

    let navigation = vec![
        NavItem {
            name: "Home".to_string(),
            icon: "home_icon".to_string(),
            is_active: true,
        },
        NavItem {
            name: "Assessment".to_string(),
            icon: "assessment_icon".to_string(),
            is_active: false,
        },
        NavItem {
            name: "Progress".to_string(),
            icon: "progress_icon".to_string(),
            is_active: false,
        },
        NavItem {
            name: "Profile".to_string(),
            icon: "profile_icon".to_string(),
            is_active: false,
        },
    ];

    Json(HomePageResponse {
        greeting: "Welcome to Hairlyzer!".to_string(),
        buttons,
        tips,
        navigation,
    })
}

pub async fn help_support() -> Json<Value> {
    Json(json!({
        "message": "For help and support, please visit our website or contact us at support@hairlyzer.com"
    }))
}
