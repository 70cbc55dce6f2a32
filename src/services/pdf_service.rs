use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};
use std::error::Error;
use std::fmt;

use crate::models::itinerary::Itinerary;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const LINE_HEIGHT_MM: f32 = 7.0;

const TITLE_SIZE: f32 = 20.0;
const HEADING_SIZE: f32 = 14.0;
const BODY_SIZE: f32 = 11.0;

#[derive(Debug)]
pub enum PdfError {
    RenderError(String),
}

impl fmt::Display for PdfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PdfError::RenderError(msg) => write!(f, "PDF render error: {}", msg),
        }
    }
}

impl Error for PdfError {}

impl From<printpdf::Error> for PdfError {
    fn from(err: printpdf::Error) -> Self {
        PdfError::RenderError(err.to_string())
    }
}

/// Simple text layout cursor: walks down the page and starts a new page when
/// the bottom margin is reached.
struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: f32,
}

impl<'a> PageWriter<'a> {
    fn new(doc: &'a PdfDocumentReference, layer: PdfLayerReference) -> Self {
        Self {
            doc,
            layer,
            y: PAGE_HEIGHT_MM - MARGIN_MM,
        }
    }

    fn write_line(&mut self, text: &str, size: f32, indent: f32, font: &IndirectFontRef) {
        if self.y < MARGIN_MM {
            let (page, layer) =
                self.doc
                    .add_page(Mm(PAGE_WIDTH_MM.into()), Mm(PAGE_HEIGHT_MM.into()), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT_MM - MARGIN_MM;
        }

        self.layer
            .use_text(text, size.into(), Mm((MARGIN_MM + indent).into()), Mm(self.y.into()), font);
        self.y -= LINE_HEIGHT_MM;
    }

    fn skip(&mut self, lines: f32) {
        self.y -= LINE_HEIGHT_MM * lines;
    }
}

/// Render an itinerary to PDF bytes: a title block followed by one section
/// per day with its time-ordered activities.
pub fn render_itinerary(itinerary: &Itinerary) -> Result<Vec<u8>, PdfError> {
    let (doc, page, layer) = PdfDocument::new(
        "Travel Itinerary",
        Mm(PAGE_WIDTH_MM.into()),
        Mm(PAGE_HEIGHT_MM.into()),
        "Layer 1",
    );
    let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    let first_layer = doc.get_page(page).get_layer(layer);
    let mut writer = PageWriter::new(&doc, first_layer);

    writer.write_line("Your Travel Itinerary", TITLE_SIZE, 0.0, &bold);
    writer.write_line(
        &format!("{} - {}", itinerary.destination, itinerary.duration),
        HEADING_SIZE,
        0.0,
        &regular,
    );

    if !itinerary.interests.is_empty() {
        writer.write_line(
            &format!("Interests: {}", itinerary.interests.join(", ")),
            BODY_SIZE,
            0.0,
            &regular,
        );
    }
    writer.skip(1.0);

    for day in &itinerary.itinerary {
        writer.write_line(&format!("Day {} - {}", day.day, day.date), HEADING_SIZE, 0.0, &bold);

        for activity in &day.activities {
            writer.write_line(
                &format!("{}  {}", activity.time, activity.activity),
                BODY_SIZE,
                5.0,
                &regular,
            );
            writer.write_line(
                &format!("{} ({})", activity.location, activity.category.as_str()),
                BODY_SIZE,
                12.0,
                &regular,
            );
        }
        writer.skip(0.5);
    }

    Ok(doc.save_to_bytes()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::itinerary::{ActivityCategory, ActivityInstance, DayPlan};

    fn sample_itinerary() -> Itinerary {
        Itinerary {
            destination: "Lisbon".to_string(),
            duration: "2 days".to_string(),
            interests: vec!["Food".to_string()],
            itinerary: vec![
                DayPlan {
                    day: 1,
                    date: "2025-06-01".to_string(),
                    activities: vec![ActivityInstance {
                        time: "09:00 AM".to_string(),
                        activity: "Day 1: Try local cuisine".to_string(),
                        location: "Traditional Restaurant".to_string(),
                        category: ActivityCategory::Food,
                    }],
                },
                DayPlan {
                    day: 2,
                    date: "2025-06-02".to_string(),
                    activities: vec![],
                },
            ],
        }
    }

    #[test]
    fn renders_nonempty_pdf_bytes() {
        let bytes = render_itinerary(&sample_itinerary()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 500);
    }

    #[test]
    fn many_days_paginate_without_error() {
        let mut itinerary = sample_itinerary();
        let day = itinerary.itinerary[0].clone();
        for i in 3..=40 {
            let mut next = day.clone();
            next.day = i;
            itinerary.itinerary.push(next);
        }
        assert!(render_itinerary(&itinerary).is_ok());
    }
}
