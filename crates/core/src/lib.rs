//! Cross-camera person re-identification.
//!
//! Groups per-frame detections into identities by clustering their
//! embeddings: cosine similarity, threshold-cut agglomerative clustering,
//! then first-appearance group assembly.

pub mod clustering {
    pub mod domain {
        pub mod agglomerative_clusterer;
        pub mod cluster_config;
        pub mod distance_matrix;
        pub mod linkage;
    }
}

pub mod grouping {
    pub mod domain {
        pub mod group_assembler;
    }
}

pub mod io {
    pub mod domain {
        pub mod detection_reader;
        pub mod group_writer;
        pub mod io_error;
    }
    pub mod infrastructure;
}

pub mod pipeline {
    pub mod pipeline_logger;
    pub mod reidentify_use_case;
}

pub mod shared {
    pub mod constants;
    pub mod detection;
    pub mod grouping_error;
}

pub mod similarity {
    pub mod domain {
        pub mod similarity_engine;
        pub mod similarity_metric;
    }
    pub mod infrastructure;
}
