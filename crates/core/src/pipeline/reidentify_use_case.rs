use std::time::Instant;

use crate::clustering::domain::agglomerative_clusterer::{
    AgglomerativeClusterer, ClusterAssignment,
};
use crate::clustering::domain::cluster_config::ClusterConfig;
use crate::grouping::domain::group_assembler;
use crate::pipeline::pipeline_logger::{NullPipelineLogger, PipelineLogger};
use crate::shared::detection::{Detection, DetectionId};
use crate::shared::grouping_error::GroupingError;
use crate::similarity::domain::similarity_engine::SimilarityEngine;
use crate::similarity::infrastructure::cosine_similarity::CosineSimilarity;

/// Identity groups together with the clustering that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupingResult<T> {
    pub groups: Vec<Vec<T>>,
    pub assignment: ClusterAssignment,
}

/// Groups detections from several cameras into per-person identities.
///
/// Runs similarity scoring, threshold-cut agglomerative clustering and group
/// assembly in sequence. Each stage's intermediate output is dropped once the
/// next stage has consumed it.
pub struct ReidentifyUseCase {
    similarity: SimilarityEngine,
    clusterer: AgglomerativeClusterer,
    logger: Box<dyn PipelineLogger>,
}

impl ReidentifyUseCase {
    pub fn new(
        similarity: SimilarityEngine,
        clusterer: AgglomerativeClusterer,
        logger: Box<dyn PipelineLogger>,
    ) -> Self {
        Self {
            similarity,
            clusterer,
            logger,
        }
    }

    /// Cosine similarity with a silent logger.
    pub fn with_config(config: ClusterConfig) -> Result<Self, GroupingError> {
        Ok(Self::new(
            SimilarityEngine::new(Box::new(CosineSimilarity::new())),
            AgglomerativeClusterer::new(config)?,
            Box::new(NullPipelineLogger),
        ))
    }

    pub fn execute(
        &mut self,
        detections: &[Detection],
    ) -> Result<GroupingResult<DetectionId>, GroupingError> {
        let ids: Vec<DetectionId> = detections.iter().map(|d| d.id.clone()).collect();
        let embeddings: Vec<&[f64]> = detections.iter().map(|d| d.embedding.as_slice()).collect();
        self.group(&ids, &embeddings)
    }

    /// Groups arbitrary identifiers by their parallel embeddings.
    pub fn group<T: Clone>(
        &mut self,
        ids: &[T],
        embeddings: &[&[f64]],
    ) -> Result<GroupingResult<T>, GroupingError> {
        if ids.len() != embeddings.len() {
            return Err(GroupingError::DimensionMismatch(format!(
                "{} identifiers but {} embeddings",
                ids.len(),
                embeddings.len()
            )));
        }
        self.logger.metric("detections", ids.len() as f64);

        let start = Instant::now();
        let similarity = self.similarity.compute(embeddings)?;
        self.logger.timing("similarity", elapsed_ms(start));

        let start = Instant::now();
        let assignment = self.clusterer.cluster(&similarity)?;
        drop(similarity);
        self.logger.timing("clustering", elapsed_ms(start));

        let start = Instant::now();
        let groups = group_assembler::assemble(ids, &assignment.labels)?;
        self.logger.timing("assembly", elapsed_ms(start));

        self.logger.metric("merges", assignment.merges.len() as f64);
        self.logger.metric("groups", groups.len() as f64);
        self.logger.info(&format!(
            "Grouped {} detections into {} identities (threshold {}, {} linkage)",
            ids.len(),
            groups.len(),
            self.clusterer.config().threshold,
            self.clusterer.config().linkage
        ));

        Ok(GroupingResult { groups, assignment })
    }

    pub fn finish(&self) {
        self.logger.summary();
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
