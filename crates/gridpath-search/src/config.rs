//! Search configuration.

use crate::strategy::Strategy;
use crate::traits::{NodeId, WeightedGraph};

/// How passability turns into accumulated cost for the weighted strategies.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CostModel {
    /// `cost(next) = (cost(current) + 1) * passability(next)`.
    ///
    /// Passability scales the whole running cost, so a low value makes a
    /// node *cheaper* to reach. A* adds the straight-line estimate into the
    /// stored cost itself.
    #[default]
    Multiplier,
    /// `cost(next) = cost(current) + step_length / passability(next)`.
    ///
    /// Low passability is hard terrain. A* orders by cost plus estimate but
    /// stores the bare cost.
    Resistance,
}

impl CostModel {
    /// Cost of `to` when entered from `from`, whose cost is `current`.
    /// Zero (or non-finite) passability yields `+inf`.
    pub fn step<G: WeightedGraph + ?Sized>(
        self,
        graph: &G,
        current: f32,
        from: NodeId,
        to: NodeId,
    ) -> f32 {
        let p = graph.passability(to);
        if p.is_nan() || p <= 0.0 {
            return f32::INFINITY;
        }
        match self {
            CostModel::Multiplier => (current + 1.0) * p,
            CostModel::Resistance => current + graph.step_length(from, to) / p,
        }
    }
}

/// What the search does with nodes whose passability is zero.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ZeroPassability {
    /// Never discover them; they act as walls for every strategy.
    #[default]
    Exclude,
    /// Discover them with infinite cost. Unweighted strategies walk through.
    Infinite,
}

/// Everything a [`Pathfinder`](crate::Pathfinder) needs besides the graph.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    pub strategy: Strategy,
    pub cost_model: CostModel,
    pub zero_passability: ZeroPassability,
}

impl SearchConfig {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_cost_model(mut self, cost_model: CostModel) -> Self {
        self.cost_model = cost_model;
        self
    }

    pub fn with_zero_passability(mut self, zero_passability: ZeroPassability) -> Self {
        self.zero_passability = zero_passability;
        self
    }
}
