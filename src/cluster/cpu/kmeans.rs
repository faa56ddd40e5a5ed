//! CPU implementation of K-Means clustering.

use crate::cluster::impl_generic::{kmeans_impl, kmeans_predict_impl};
use crate::cluster::traits::kmeans::{KMeansAlgorithms, KMeansOptions, KMeansResult};
use crate::error::Result;
use crate::matrix::Matrix;
use crate::runtime::CpuClient;

impl KMeansAlgorithms for CpuClient {
    fn kmeans(&self, data: &Matrix, options: &KMeansOptions) -> Result<KMeansResult> {
        kmeans_impl(self, data, options)
    }

    fn kmeans_predict(&self, centroids: &Matrix, data: &Matrix) -> Result<Vec<usize>> {
        kmeans_predict_impl(self, centroids, data)
    }
}
