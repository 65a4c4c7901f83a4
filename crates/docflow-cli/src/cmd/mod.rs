pub mod correct;
pub mod extract;
pub mod gtm;
pub mod milestones;
pub mod plan;
pub mod prd;
pub mod run;
pub mod spec;
