//! Usage principles and disclaimers shipped with every projection.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Principle {
    pub title: &'static str,
    pub description: &'static str,
}

pub const PRINCIPLES: [Principle; 4] = [
    Principle {
        title: "No Personal Voter Data",
        description: "This tool does not collect, store, or process any personal voter \
                      information. All simulations use assumed, hypothetical data.",
    },
    Principle {
        title: "Political Neutrality",
        description: "The simulator does not promote or oppose any political policy or party. \
                      It is designed purely for academic and analytical purposes.",
    },
    Principle {
        title: "Academic Purpose Only",
        description: "This tool is created for educational and policy research purposes. \
                      It helps understand potential outcomes of different electoral scenarios.",
    },
    Principle {
        title: "Assumed Data Disclaimer",
        description: "All numerical values, costs, and projections are hypothetical assumptions. \
                      They should not be considered as actual government data.",
    },
];

pub const DISCLAIMERS: [&str; 5] = [
    "The simulation results are based on simplified mathematical models and assumed parameters.",
    "Actual implementation outcomes may vary significantly from projected results.",
    "This tool does not replace professional policy analysis or government data.",
    "No financial or administrative decisions should be based solely on these simulations.",
    "The tool is not affiliated with any government body or political organization.",
];

pub const INTENDED_USES: [&str; 4] = [
    "Academic research and education",
    "Policy analysis and discussions",
    "Understanding electoral logistics",
    "Comparative scenario studies",
];

#[derive(Debug, Clone, Serialize)]
pub struct EthicsStatement {
    pub principles: Vec<Principle>,
    pub disclaimers: Vec<&'static str>,
    pub intended_uses: Vec<&'static str>,
}

pub fn ethics_statement() -> EthicsStatement {
    EthicsStatement {
        principles: PRINCIPLES.to_vec(),
        disclaimers: DISCLAIMERS.to_vec(),
        intended_uses: INTENDED_USES.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::ethics_statement;
    use crate::output::json::render_json;

    #[test]
    fn statement_serializes_every_section() {
        let json = render_json(&ethics_statement()).expect("render json");
        let value: serde_json::Value = serde_json::from_str(&json).expect("parse json");
        assert_eq!(value["principles"].as_array().map(Vec::len), Some(4));
        assert_eq!(value["principles"][1]["title"], "Political Neutrality");
        assert_eq!(value["disclaimers"].as_array().map(Vec::len), Some(5));
        assert_eq!(value["intended_uses"][3], "Comparative scenario studies");
    }
}
