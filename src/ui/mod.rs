/// UI layer: immediate-mode panels built on egui.

pub mod panels;
pub mod plot;
