use crate::app::mode::AppMode;

/// Snapshot of everything the view needs for one frame
pub struct RenderState {
    pub mode: AppMode,
    pub file_name: Option<String>,
    pub error: Option<String>,
    pub success: Option<String>,
    pub extracting: bool,
    pub preview_rows: Vec<String>,
    pub scroll: usize,
    pub can_save: bool,
    pub output_name: Option<String>,
    pub command_buffer: String,
}
