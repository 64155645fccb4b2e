use crate::config::{ConvertSide, ScriptConversion};
use crate::domain::model::MergeReport;
use crate::utils::error::Result;

pub trait ConfigProvider: Send + Sync {
    fn st_path(&self) -> &str;
    fn tt_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn dirty_path(&self) -> Option<&str>;
    fn conversion(&self) -> ScriptConversion;
    fn convert_side(&self) -> ConvertSide;
    fn convert_idiom(&self) -> bool;
    fn filter_ass_tags(&self) -> bool;
    fn filter_duplicates(&self) -> bool;
    fn filter_bilingual(&self) -> bool;
    fn rules_path(&self) -> Option<&str>;
}

pub trait Pipeline: Send + Sync {
    fn run(&self) -> Result<MergeReport>;
}
