/// Scalar arithmetic and comparison kernels.
///
/// Operands arrive in slot order and every operator computes with the
/// roles swapped; this module is the single place where that convention
/// lives.
pub mod binary;
/// Sequencing, conditionals, and loops.
pub mod control;
/// The evaluation entry point and operand resolution.
///
/// Implements `Expr::evaluate` and the three-way operand resolution rule
/// shared by every construct.
pub mod core;
/// Binding and storage constructs: allocation, assignment, array stores,
/// subroutine definition and invocation, and printing.
pub mod storage;
