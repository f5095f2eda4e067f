/// Page styling configuration for exports. All lengths in millimetres,
/// font sizes in points.
#[derive(Debug, Clone)]
pub struct DocumentStyles {
    pub page_width: f64,
    pub page_height: f64,
    /// Page margin, applied uniformly.
    pub margin: f64,
    pub title_size: f64,
    pub heading_size: f64,
    pub body_size: f64,
    /// Width of the chart region; its height follows from the layout.
    pub chart_width: f64,
    pub table_row_height: f64,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            page_width: 210.0,
            page_height: 297.0,
            margin: 18.0,
            title_size: 16.0,
            heading_size: 12.0,
            body_size: 10.0,
            chart_width: 174.0,
            table_row_height: 7.0,
        }
    }
}
