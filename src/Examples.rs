//! examples of usage of RustedFunctionTree
/// building, printing, differentiating and integrating function trees
pub mod function_tree_examples;
