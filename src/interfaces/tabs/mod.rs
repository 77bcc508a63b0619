pub mod data;
pub mod indicators;
pub mod model;
pub mod summary;
pub mod technical;

/// Dashboard sections, in tab-bar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Technical,
    Indicators,
    Model,
    Summary,
    Data,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Technical,
        Tab::Indicators,
        Tab::Model,
        Tab::Summary,
        Tab::Data,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Technical => "📈 Technical Analysis",
            Tab::Indicators => "🎯 Current Indicators",
            Tab::Model => "📊 Model Performance",
            Tab::Summary => "📝 Summary",
            Tab::Data => "🗂 Data",
        }
    }
}
