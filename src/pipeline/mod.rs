pub mod stage1_select;
pub mod stage2_judges;
pub mod stage3_context;
pub mod stage4_history;
pub mod stage5_report;
