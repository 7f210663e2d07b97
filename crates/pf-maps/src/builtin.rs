//! Bundled city networks.
//!
//! Coordinates are screen-space positions, weights are road distances in km.

use std::fmt;
use std::str::FromStr;

use pf_core::{PfError, Real};
use pf_graph::Graph;

type City = (&'static str, &'static str, Real, Real);
type Road = (&'static str, &'static str, Real);

const USA_CITIES: &[City] = &[
    ("nyc", "New York", 850.0, 300.0),
    ("la", "Los Angeles", 150.0, 450.0),
    ("chicago", "Chicago", 650.0, 280.0),
    ("houston", "Houston", 450.0, 550.0),
    ("phoenix", "Phoenix", 250.0, 500.0),
    ("philadelphia", "Philadelphia", 820.0, 320.0),
    ("san_diego", "San Diego", 120.0, 520.0),
    ("dallas", "Dallas", 450.0, 520.0),
    ("san_jose", "San Jose", 100.0, 380.0),
    ("austin", "Austin", 420.0, 580.0),
    ("seattle", "Seattle", 110.0, 150.0),
    ("denver", "Denver", 350.0, 340.0),
    ("boston", "Boston", 880.0, 260.0),
    ("miami", "Miami", 780.0, 680.0),
    ("las_vegas", "Las Vegas", 200.0, 420.0),
];

const USA_ROADS: &[Road] = &[
    ("nyc", "philadelphia", 95.0),
    ("nyc", "boston", 215.0),
    ("philadelphia", "boston", 310.0),
    ("chicago", "denver", 920.0),
    ("houston", "dallas", 240.0),
    ("dallas", "austin", 195.0),
    ("la", "san_diego", 120.0),
    ("la", "phoenix", 370.0),
    ("san_diego", "phoenix", 355.0),
    ("seattle", "denver", 1300.0),
    ("denver", "las_vegas", 750.0),
    ("denver", "phoenix", 600.0),
    ("las_vegas", "la", 270.0),
    ("houston", "phoenix", 1180.0),
    ("dallas", "denver", 780.0),
    ("chicago", "nyc", 790.0),
    ("miami", "houston", 1190.0),
];

const EUROPE_CITIES: &[City] = &[
    ("london", "London", 400.0, 250.0),
    ("paris", "Paris", 420.0, 300.0),
    ("berlin", "Berlin", 550.0, 220.0),
    ("madrid", "Madrid", 320.0, 400.0),
    ("rome", "Rome", 550.0, 420.0),
    ("barcelona", "Barcelona", 380.0, 420.0),
    ("amsterdam", "Amsterdam", 450.0, 220.0),
    ("vienna", "Vienna", 600.0, 300.0),
    ("prague", "Prague", 570.0, 260.0),
    ("budapest", "Budapest", 620.0, 320.0),
    ("warsaw", "Warsaw", 650.0, 220.0),
    ("brussels", "Brussels", 440.0, 260.0),
    ("munich", "Munich", 530.0, 300.0),
    ("milan", "Milan", 500.0, 360.0),
    ("zurich", "Zurich", 490.0, 320.0),
];

const EUROPE_ROADS: &[Road] = &[
    ("london", "paris", 340.0),
    ("london", "amsterdam", 360.0),
    ("london", "brussels", 320.0),
    ("paris", "brussels", 265.0),
    ("paris", "barcelona", 830.0),
    ("paris", "zurich", 490.0),
    ("barcelona", "madrid", 505.0),
    ("madrid", "paris", 1050.0),
    ("rome", "milan", 480.0),
    ("rome", "vienna", 765.0),
    ("milan", "zurich", 220.0),
    ("milan", "munich", 410.0),
    ("berlin", "amsterdam", 580.0),
    ("berlin", "prague", 280.0),
    ("berlin", "warsaw", 520.0),
    ("berlin", "munich", 505.0),
    ("prague", "vienna", 250.0),
    ("prague", "munich", 305.0),
    ("vienna", "budapest", 215.0),
    ("vienna", "munich", 355.0),
    ("budapest", "warsaw", 545.0),
    ("amsterdam", "brussels", 175.0),
    ("brussels", "zurich", 520.0),
];

const INDIA_CITIES: &[City] = &[
    ("delhi", "New Delhi", 500.0, 200.0),
    ("mumbai", "Mumbai", 400.0, 350.0),
    ("bangalore", "Bangalore", 450.0, 500.0),
    ("hyderabad", "Hyderabad", 500.0, 450.0),
    ("chennai", "Chennai", 520.0, 550.0),
    ("kolkata", "Kolkata", 650.0, 300.0),
    ("pune", "Pune", 420.0, 380.0),
    ("ahmedabad", "Ahmedabad", 380.0, 280.0),
    ("jaipur", "Jaipur", 450.0, 230.0),
    ("lucknow", "Lucknow", 550.0, 240.0),
    ("chandigarh", "Chandigarh", 480.0, 180.0),
    ("kochi", "Kochi", 420.0, 600.0),
    ("indore", "Indore", 450.0, 300.0),
    ("bhopal", "Bhopal", 480.0, 290.0),
    ("nagpur", "Nagpur", 520.0, 370.0),
];

const INDIA_ROADS: &[Road] = &[
    ("delhi", "jaipur", 280.0),
    ("delhi", "chandigarh", 245.0),
    ("delhi", "lucknow", 555.0),
    ("delhi", "ahmedabad", 935.0),
    ("jaipur", "ahmedabad", 680.0),
    ("ahmedabad", "mumbai", 525.0),
    ("ahmedabad", "indore", 390.0),
    ("mumbai", "pune", 150.0),
    ("mumbai", "bangalore", 985.0),
    ("pune", "bangalore", 840.0),
    ("pune", "hyderabad", 560.0),
    ("bangalore", "hyderabad", 575.0),
    ("bangalore", "chennai", 350.0),
    ("bangalore", "kochi", 560.0),
    ("chennai", "hyderabad", 625.0),
    ("chennai", "kochi", 695.0),
    ("hyderabad", "nagpur", 500.0),
    ("nagpur", "mumbai", 800.0),
    ("nagpur", "bhopal", 350.0),
    ("indore", "bhopal", 195.0),
    ("bhopal", "delhi", 740.0),
    ("lucknow", "kolkata", 985.0),
    ("kolkata", "delhi", 1450.0),
];

/// One of the bundled city networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BuiltinMap {
    #[default]
    Usa,
    Europe,
    India,
}

impl BuiltinMap {
    pub const ALL: [BuiltinMap; 3] = [BuiltinMap::Usa, BuiltinMap::Europe, BuiltinMap::India];

    /// Short key used on the command line.
    pub fn key(self) -> &'static str {
        match self {
            BuiltinMap::Usa => "usa",
            BuiltinMap::Europe => "europe",
            BuiltinMap::India => "india",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            BuiltinMap::Usa => "USA Major Cities",
            BuiltinMap::Europe => "European Cities",
            BuiltinMap::India => "Indian Cities",
        }
    }

    fn data(self) -> (&'static [City], &'static [Road]) {
        match self {
            BuiltinMap::Usa => (USA_CITIES, USA_ROADS),
            BuiltinMap::Europe => (EUROPE_CITIES, EUROPE_ROADS),
            BuiltinMap::India => (INDIA_CITIES, INDIA_ROADS),
        }
    }

    /// Build a fresh graph; every road is bidirectional.
    pub fn graph(self) -> Graph {
        let (cities, roads) = self.data();
        let mut graph = Graph::new();
        for &(id, name, x, y) in cities {
            graph.add_node(id, name, x, y);
        }
        for &(from, to, km) in roads {
            graph.add_bidirectional_edge(from, to, km);
        }
        graph
    }
}

impl fmt::Display for BuiltinMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for BuiltinMap {
    type Err = PfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BuiltinMap::ALL
            .into_iter()
            .find(|m| m.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PfError::InvalidArg {
                what: format!("unknown map '{s}' (expected usa, europe or india)"),
            })
    }
}
