//! Pie chart messages built from labeled numeric data.

use crate::error::ChartError;
use crate::message::{DiagramMessage, push_mermaid_fence};
use tracing::debug;

/// One computed slice of a pie chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub value: f64,
    /// Share of the total, in percent.
    pub percentage: f64,
}

#[derive(Debug, Clone)]
pub struct PieChartBuilder {
    title: String,
}

impl Default for PieChartBuilder {
    fn default() -> Self {
        Self::new("数据分布")
    }
}

impl PieChartBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Computes each slice's share of the total, keeping input order.
    pub fn slices<L: Into<String>>(
        &self,
        data: impl IntoIterator<Item = (L, f64)>,
    ) -> Result<Vec<Slice>, ChartError> {
        let data: Vec<(String, f64)> = data.into_iter().map(|(l, v)| (l.into(), v)).collect();
        if data.is_empty() {
            return Err(ChartError::EmptyDataset);
        }
        if let Some((label, value)) = data.iter().find(|(_, v)| !v.is_finite() || *v < 0.0) {
            return Err(ChartError::InvalidValue {
                label: label.clone(),
                value: *value,
            });
        }

        let total: f64 = data.iter().map(|(_, v)| v).sum();
        if !total.is_finite() {
            return Err(ChartError::TotalOverflow);
        }
        if total == 0.0 {
            return Err(ChartError::ZeroTotal);
        }

        Ok(data
            .into_iter()
            .map(|(label, value)| Slice {
                label,
                value,
                percentage: value / total * 100.0,
            })
            .collect())
    }

    /// Builds the chart plus a bullet list restating every value and the total.
    pub fn build<L: Into<String>>(
        &self,
        data: impl IntoIterator<Item = (L, f64)>,
    ) -> Result<DiagramMessage, ChartError> {
        let slices = self.slices(data)?;
        let total: f64 = slices.iter().map(|s| s.value).sum();
        debug!(slices = slices.len(), total, "building pie chart");

        let mut diagram = format!("pie title {}\n", self.title);
        for slice in &slices {
            diagram.push_str(&format!(
                "    \"{}\" : {:.1}\n",
                slice.label, slice.percentage
            ));
        }

        let mut content = String::from("\n数据分析完成！以下是可视化结果：\n\n");
        push_mermaid_fence(&mut content, &diagram);
        content.push_str("\n**数据说明**：\n");
        for slice in &slices {
            content.push_str(&format!(
                "\n- **{}**: {} ({:.1}%)",
                slice.label, slice.value, slice.percentage
            ));
        }
        content.push_str(&format!("\n\n总计: {}", total));

        Ok(DiagramMessage::new(content, diagram, slices.len()))
    }
}
