use rayon::prelude::*;

use crate::{checkers, Regressor, Sample};
use crate::error::Result;
use super::node::*;

use std::path::Path;
use std::fs::File;
use std::io::prelude::*;


/// Random tree regressor.
/// This struct is a wrapper of the root `Node`
/// together with the parameters that grew it.
///
/// The tree is never mutated after `RandomTree::fit` returns,
/// so a `RandomTreeRegressor` can be queried from many threads at once.
#[derive(Debug, Clone, PartialEq)]
pub struct RandomTreeRegressor {
    root: Node,
    n_feature: usize,
    leaf_size: usize,
    seed: u64,
}


impl RandomTreeRegressor {
    #[inline]
    pub(super) fn from_components(
        root: Node,
        n_feature: usize,
        leaf_size: usize,
        seed: u64,
    ) -> Self
    {
        Self { root, n_feature, leaf_size, seed, }
    }


    /// Predicts the target value of each row.
    /// Returns `Err(InvalidInput)` if a row does not have
    /// as many columns as the training sample.
    ///
    /// A `NaN` feature value is routed to the right child
    /// (`value > threshold`) on every branch node.
    pub fn query<R>(&self, rows: &[R]) -> Result<Vec<f64>>
        where R: AsRef<[f64]> + Sync
    {
        for (i, row) in rows.iter().enumerate() {
            checkers::row_width(self.n_feature, row.as_ref().len(), i)?;
        }

        let predictions = rows.par_iter()
            .map(|row| self.root.leaf_of_row(row.as_ref()).prediction())
            .collect::<Vec<_>>();
        Ok(predictions)
    }


    /// Predicts the target value of a single row.
    pub fn predict_row(&self, row: &[f64]) -> Result<f64> {
        Ok(self.leaf_of_row(row)?.prediction())
    }


    /// Returns the leaf that `row` reaches.
    /// Returns `Err(InvalidInput)` if `row` does not have
    /// as many columns as the training sample.
    pub fn leaf_of_row(&self, row: &[f64]) -> Result<&LeafNode> {
        checkers::n_columns(self.n_feature, row.len())?;
        Ok(self.root.leaf_of_row(row))
    }


    /// Predicts the target values of all rows of `sample`.
    /// Returns `Err(InvalidInput)` if `sample` does not have
    /// as many columns as the training sample.
    pub fn query_sample(&self, sample: &Sample) -> Result<Vec<f64>> {
        checkers::n_columns(self.n_feature, sample.shape().1)?;
        Ok(self.predict_all(sample))
    }


    /// Returns the root node.
    pub fn root(&self) -> &Node {
        &self.root
    }


    /// Returns the number of feature columns of the training sample.
    pub fn n_features(&self) -> usize {
        self.n_feature
    }


    /// Returns the leaf size the tree was grown with.
    pub fn leaf_size(&self) -> usize {
        self.leaf_size
    }


    /// Returns the seed the tree was grown with.
    pub fn seed(&self) -> u64 {
        self.seed
    }


    /// Returns the number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }


    /// Returns the number of leaves.
    pub fn n_leaves(&self) -> usize {
        self.root.n_leaves()
    }


    /// Returns the number of nodes.
    pub fn n_nodes(&self) -> usize {
        self.root.n_nodes()
    }


    /// Returns the current tree in the Graphviz `dot` format.
    pub fn to_dot(&self) -> String {
        let mut dot = String::from("graph RandomTree {\n");
        let mut next_id = 0;
        self.root.write_dot(&mut dot, &mut next_id);
        dot.push('}');
        dot
    }


    /// Write the current tree to dot file.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P) -> std::io::Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(self.to_dot().as_bytes())?;
        Ok(())
    }
}


impl Regressor for RandomTreeRegressor {
    /// The caller guarantees that `sample` has
    /// as many columns as the training sample.
    fn predict(&self, sample: &Sample, row: usize) -> f64 {
        self.root.leaf_of(sample, row).prediction()
    }
}
