use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub month: String,
    pub revenue: f64,
    pub expenses: f64,
    pub profit: f64,
}

/// Share of loads by trailer type, in percent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadShare {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnTimePoint {
    pub month: String,
    pub on_time: f64,
    pub late: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateLoads {
    pub state: String,
    pub loads: u32,
}
