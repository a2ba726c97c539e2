// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod rates_ron_datasource;
        pub(crate) mod records_csv_datasource;
        pub(crate) mod records_json_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod clp_amount_model;
        pub(crate) mod iso_timestamp_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod ledger_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod commission_breakdown;
        pub(crate) mod commission_rates;
        pub(crate) mod commission_record;
        pub(crate) mod document_sale;
        pub(crate) mod earnings_projection;
        pub(crate) mod monthly_summary;
        pub(crate) mod settlement;
        pub(crate) mod validation_report;
    }
    pub(crate) mod logic {
        pub(crate) mod aggregator;
        pub(crate) mod earnings_projector;
        pub(crate) mod period_reporter;
        pub(crate) mod rate_adjuster;
        pub(crate) mod settlement_planner;
        pub(crate) mod split_calculator;
        pub(crate) mod validator;
    }
    pub(crate) mod repositories {
        pub(crate) mod ledger_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod settlement_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod clp_fmt;
    pub(crate) mod settlement_printer;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::commission_breakdown::*;
        pub use crate::domain::entities::commission_rates::*;
        pub use crate::domain::entities::commission_record::*;
        pub use crate::domain::entities::document_sale::*;
        pub use crate::domain::entities::earnings_projection::*;
        pub use crate::domain::entities::monthly_summary::*;
        pub use crate::domain::entities::settlement::*;
        pub use crate::domain::entities::validation_report::*;
    }
}
