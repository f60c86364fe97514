pub mod achievements_view;
pub mod app;
pub mod compound_card;
pub mod compound_modal;
pub mod discovery_tab;
pub mod load_error;
pub mod reaction_flask;
pub mod reaction_guide;
pub mod settings_modal;
pub mod stats_panel;
pub mod tab_bar;
pub mod toast_stack;
