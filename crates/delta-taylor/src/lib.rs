//! Rigorous polynomial enclosures for neural-network activations.
//!
//! Turns an activation function restricted to a bounded input range into
//! a provably sound enclosure: a low-degree Taylor expansion plus an
//! interval remainder guaranteed to contain the true approximation error
//! everywhere in the range. A reachability engine applies one enclosure
//! per scalar activation output per layer while propagating state sets
//! through a network.
//!
//! Construction is degree-adaptive: a degree-2 expansion sized by a
//! rigorous third-derivative bound, escalating to degree 3 (sized by the
//! fourth-derivative bound) when the remainder is too wide. ReLU gets a
//! case split: exact zero/identity enclosures on monotone sub-ranges and
//! a steep-swish surrogate with an explicit deviation correction when the
//! range straddles zero.

pub mod activation;
pub mod bounds;
pub mod derivative;
pub mod reset;

pub use activation::{sigmoid, swish, swish_hundred, swish_ten, tanh};
pub use bounds::{
    sigmoid_fourth_derivative_bound, sigmoid_third_derivative_bound,
    swish_fourth_derivative_bound, swish_hundred_fourth_derivative_bound,
    swish_hundred_third_derivative_bound, swish_ten_fourth_derivative_bound,
    swish_ten_third_derivative_bound, swish_third_derivative_bound,
    tanh_fourth_derivative_bound, tanh_third_derivative_bound,
};
pub use derivative::{sigmoid_derivative, tanh_derivative};
pub use reset::{
    activation_reset, relu_reset, sigmoid_reset, swish10_reset, swish_reset, tanh_reset,
};

#[cfg(test)]
mod tests;
