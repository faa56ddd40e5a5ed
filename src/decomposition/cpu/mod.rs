//! CPU bindings for decomposition algorithms.

mod pca;
