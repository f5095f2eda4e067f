//! PDF assembly for the clinical chart document.
//!
//! Two pages: the odontogram with the hygiene table, then the CPO/ceo
//! indices and the signature block. The exporter reads a snapshot of the
//! record and never mutates it; a bad signature payload is logged and the
//! rest of the document still exports.

use base64::Engine as _;
use kurbo::Point;
use printpdf::{
    BuiltinFont, Image, ImageTransform, IndirectFontRef, PdfDocument, PdfLayerReference,
    image_crate,
};

use odonta_chart::layout::{ChartLayout, LayoutParams};
use odonta_chart::paint::{Painter, paint_chart};
use odonta_chart::palette;
use odonta_core::models::record::ClinicalRecord;
use odonta_indices::hygiene_totals;

use crate::error::ExportError;
use crate::painter::{MM_PER_PT, PdfPainter, mm};
use crate::styles::DocumentStyles;
use crate::tables::{TableSpec, draw_table};

/// Render the record to PDF bytes.
pub fn generate_pdf(
    record: &ClinicalRecord,
    styles: &DocumentStyles,
) -> Result<Vec<u8>, ExportError> {
    let (doc, page1, layer1) = PdfDocument::new(
        "Historia Clínica Odontológica",
        mm(styles.page_width),
        mm(styles.page_height),
        "odontograma",
    );
    let body = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Font(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ExportError::Font(e.to_string()))?;

    let m = styles.margin;
    let layer = doc.get_page(page1).get_layer(layer1);
    write_line(
        &layer,
        &bold,
        styles.title_size,
        m,
        m + 6.0,
        styles.page_height,
        "Odontograma",
    );
    write_line(
        &layer,
        &body,
        styles.body_size,
        m,
        m + 13.0,
        styles.page_height,
        &format!("Paciente: {}", record.header.patient_label),
    );
    write_line(
        &layer,
        &body,
        styles.body_size,
        m + styles.chart_width / 2.0,
        m + 13.0,
        styles.page_height,
        &format!("Fecha: {}", record.header.date),
    );

    // The chart region reuses the interactive layout wholesale; one scale
    // factor maps canvas pixels to page millimetres.
    let base = LayoutParams::default();
    let scaled = base.scaled(styles.chart_width / base.width);
    let chart_top = m + 22.0;
    let params = scaled.with_origin(Point::new(m, chart_top + scaled.cell));
    let layout = ChartLayout::new(params);
    let mut painter = PdfPainter::new(layer.clone(), &body, styles.page_height);
    paint_chart(&record.odontogram.chart, &layout, &mut painter);

    // Simplified oral hygiene table, with the aggregate row.
    let table_top = params.origin.y + params.content_height() + 12.0;
    write_line(
        &layer,
        &bold,
        styles.heading_size,
        m,
        table_top - 3.0,
        styles.page_height,
        "Higiene oral simplificada",
    );
    let totals = hygiene_totals(&record.odontogram.hygiene);
    let mut rows = vec![row(&["Piezas", "Placa", "Cálculo", "Gingivitis"])];
    for sextant in record.odontogram.hygiene.rows() {
        let pieces = sextant
            .pieces
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("-");
        rows.push(vec![
            pieces,
            sextant.placa.clone(),
            sextant.calculo.clone(),
            sextant.gingivitis.clone(),
        ]);
    }
    rows.push(row(&[
        "Total",
        &totals.placa.to_string(),
        &totals.calculo.to_string(),
        &totals.gingivitis.to_string(),
    ]));
    let hygiene_spec = TableSpec {
        origin: Point::new(m, table_top),
        col_widths: &[48.0, 32.0, 32.0, 32.0],
        row_height: styles.table_row_height,
        text_size: styles.body_size * MM_PER_PT,
    };
    draw_table(&mut painter, &hygiene_spec, &rows);

    // Page 2: indices and the signature block.
    let (page2, layer2) = doc.add_page(mm(styles.page_width), mm(styles.page_height), "índices");
    let layer2 = doc.get_page(page2).get_layer(layer2);
    let mut painter2 = PdfPainter::new(layer2.clone(), &body, styles.page_height);

    write_line(
        &layer2,
        &bold,
        styles.heading_size,
        m,
        m + 6.0,
        styles.page_height,
        "Índices CPO / ceo",
    );
    let cpo = record.odontogram.cpo;
    let ceo = record.odontogram.ceo;
    let index_spec = TableSpec {
        origin: Point::new(m, m + 10.0),
        col_widths: &[28.0, 24.0, 24.0, 24.0, 24.0],
        row_height: styles.table_row_height,
        text_size: styles.body_size * MM_PER_PT,
    };
    draw_table(
        &mut painter2,
        &index_spec,
        &[
            row(&["Índice", "C", "P / e", "O", "Total"]),
            row(&[
                "CPO",
                &cpo.c.to_string(),
                &cpo.p.to_string(),
                &cpo.o.to_string(),
                &cpo.total.to_string(),
            ]),
            row(&[
                "ceo",
                &ceo.c.to_string(),
                &ceo.e.to_string(),
                &ceo.o.to_string(),
                &ceo.total.to_string(),
            ]),
        ],
    );

    // Signature: decode/embedding failures must not lose the document.
    if let Some(data) = &record.signature_png {
        if let Err(err) = embed_signature(&layer2, data, m, m + 12.0) {
            tracing::warn!(error = %err, "signature image skipped");
        }
    }
    let signature_y = styles.page_height - m - 14.0;
    painter2.draw_line(
        Point::new(m, signature_y),
        Point::new(m + 70.0, signature_y),
        palette::OUTLINE,
        0.3,
    );
    painter2.draw_text(
        "Firma del profesional",
        Point::new(m + 35.0, signature_y + 5.0),
        styles.body_size * MM_PER_PT,
        palette::LABEL,
    );

    doc.save_to_bytes().map_err(|e| ExportError::Pdf(e.to_string()))
}

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| (*c).to_string()).collect()
}

fn write_line(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    size_pt: f64,
    x: f64,
    y_from_top: f64,
    page_height: f64,
    text: &str,
) {
    layer.use_text(text, size_pt as _, mm(x), mm(page_height - y_from_top), font);
}

/// Decode a (possibly data-URL wrapped) base64 PNG and place it above the
/// signature rule. `x`/`bottom` are page millimetres from the bottom-left.
fn embed_signature(
    layer: &PdfLayerReference,
    data: &str,
    x: f64,
    bottom: f64,
) -> Result<(), ExportError> {
    let payload = data.rsplit(',').next().unwrap_or(data);
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload.trim())
        .map_err(|e| ExportError::Signature(e.to_string()))?;
    let decoded =
        image_crate::load_from_memory(&bytes).map_err(|e| ExportError::Signature(e.to_string()))?;
    let image = Image::from_dynamic_image(&decoded);
    image.add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(mm(x)),
            translate_y: Some(mm(bottom)),
            dpi: Some(300.0),
            ..Default::default()
        },
    );
    Ok(())
}
