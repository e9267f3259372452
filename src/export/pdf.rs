use super::sink::DocumentSink;
use crate::errors::AppResult;
use crate::imaging::{EncodedImage, ImageFormat};
use pdf_writer::{Content, Filter, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

const PT_PER_MM: f32 = 72.0 / 25.4;

/// Page being drawn; written out when the next one starts or on save.
struct OpenPage {
    page_id: Ref,
    content_id: Ref,
    content: Content,
    images: Vec<(String, Ref)>,
}

/// `DocumentSink` writing a PDF with `pdf-writer`.
///
/// Works in millimetres from the top-left corner, like the layout, and
/// converts to PDF points (bottom-left origin) when drawing. The document
/// always has at least one page.
pub struct PdfSink {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current: Option<OpenPage>,

    page_w: f32,
    page_h: f32,

    next_id: i32,
    font_id: Ref,
    font_size: f32,
    image_count: usize,
}

impl Default for PdfSink {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfSink {
    /// A4 portrait.
    pub fn new() -> Self {
        Self::with_page_size(210.0, 297.0)
    }

    pub fn with_page_size(width_mm: f32, height_mm: f32) -> Self {
        let mut pdf = Pdf::new();

        // ID gestiti a mano
        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current: None,

            page_w: width_mm,
            page_h: height_mm,

            next_id: 4,
            font_id,
            font_size: 12.0,
            image_count: 0,
        }
    }

    /// Pages written so far, including the one being drawn.
    pub fn page_count(&self) -> usize {
        self.page_refs.len() + usize::from(self.current.is_some())
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Page being drawn, opened on first use.
    fn page(&mut self) -> &mut OpenPage {
        let next_id = &mut self.next_id;
        self.current.get_or_insert_with(|| {
            let page_id = Ref::new(*next_id);
            let content_id = Ref::new(*next_id + 1);
            *next_id += 2;
            OpenPage {
                page_id,
                content_id,
                content: Content::new(),
                images: Vec::new(),
            }
        })
    }

    /// Write the page dictionary (resources included) and its content stream.
    fn finalize_page(&mut self) {
        let Some(open) = self.current.take() else {
            return;
        };

        {
            let mut page = self.pdf.page(open.page_id);
            page.parent(self.pages_id)
                .media_box(Rect::new(
                    0.0,
                    0.0,
                    self.page_w * PT_PER_MM,
                    self.page_h * PT_PER_MM,
                ))
                .contents(open.content_id);

            let mut resources = page.resources();
            resources.fonts().pair(Name(b"F1"), self.font_id);
            if !open.images.is_empty() {
                let mut xobjects = resources.x_objects();
                for (name, id) in &open.images {
                    xobjects.pair(Name(name.as_bytes()), *id);
                }
            }
        }

        self.page_refs.push(open.page_id);
        self.pdf.stream(open.content_id, &open.content.finish());
    }

    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    /// Top-left millimetres → PDF points.
    fn to_pt(&self, x: f32, y: f32) -> (f32, f32) {
        (x * PT_PER_MM, (self.page_h - y) * PT_PER_MM)
    }
}

/// Helvetica is a single-byte font: anything outside printable ASCII is
/// shown as '?'.
fn pdf_text(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| if c.is_ascii() && !c.is_ascii_control() { c as u8 } else { b'?' })
        .collect()
}

impl DocumentSink for PdfSink {
    fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
    }

    fn write_text(&mut self, content: &str, x: f32, y: f32) {
        let (px, py) = self.to_pt(x, y);
        let size = self.font_size;
        let bytes = pdf_text(content);

        let c = &mut self.page().content;
        c.begin_text();
        c.set_font(Name(b"F1"), size);
        c.set_text_matrix([1.0, 0.0, 0.0, 1.0, px, py]);
        c.show(Str(bytes.as_slice()));
        c.end_text();
    }

    fn add_page(&mut self) {
        // the first page exists implicitly, so this always adds one
        self.page();
        self.finalize_page();
        self.page();
    }

    fn add_image(
        &mut self,
        image: &EncodedImage,
        format: ImageFormat,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
    ) {
        let id = self.fresh_ref();
        {
            let mut xobj = self.pdf.image_xobject(id, &image.bytes);
            match format {
                ImageFormat::Jpeg => {
                    xobj.filter(Filter::DctDecode);
                }
            }
            xobj.width(image.width as i32);
            xobj.height(image.height as i32);
            xobj.color_space().device_rgb();
            xobj.bits_per_component(8);
        }

        self.image_count += 1;
        let name = format!("Im{}", self.image_count);

        // the image's bottom-left corner sits at y + h from the top
        let (px, py) = self.to_pt(x, y + h);
        let (pw, ph) = (w * PT_PER_MM, h * PT_PER_MM);

        let page = self.page();
        page.content.save_state();
        page.content.transform([pw, 0.0, 0.0, ph, px, py]);
        page.content.x_object(Name(name.as_bytes()));
        page.content.restore_state();
        page.images.push((name, id));
    }

    fn page_height(&self) -> f32 {
        self.page_h
    }

    /// Finish the document and write it to `path`. The sink starts over
    /// with an empty document afterwards.
    fn save(&mut self, path: &Path) -> AppResult<()> {
        self.page();
        self.finalize_page();

        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();

        let (w, h) = (self.page_w, self.page_h);
        let done = std::mem::replace(self, Self::with_page_size(w, h));
        let bytes = done.pdf.finish();

        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}
