//! lopdf-backed document access
//!
//! The source document is read in place while the resized result is
//! assembled as a second document. Each placed page becomes a Form
//! XObject whose bounding box is the source media box; the objects its
//! content references are deep-copied into the output on first use.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

use crate::classify::ImageSize;
use crate::error::{Error, Result};
use crate::pdf::document::{DocumentIo, OutputPage};

/// Production [`DocumentIo`] implementation on top of lopdf.
pub struct LopdfBackend {
    source: Document,
    /// Source page object ids in document order.
    source_pages: Vec<ObjectId>,
    output: Document,
    /// Created output pages with their sizes in points.
    output_pages: Vec<(ObjectId, f64, f64)>,
    /// Source object id -> output object id for everything deep-copied.
    copied: HashMap<ObjectId, ObjectId>,
}

impl LopdfBackend {
    /// Open a PDF from disk.
    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self::from_document(Document::load(path)?))
    }

    /// Wrap an already-loaded document.
    pub fn from_document(source: Document) -> Self {
        let source_pages = source.get_pages().into_values().collect();
        Self {
            source,
            source_pages,
            output: Document::with_version("1.5"),
            output_pages: Vec::new(),
            copied: HashMap::new(),
        }
    }

    fn page_id(&self, index: usize) -> Result<ObjectId> {
        self.source_pages.get(index).copied().ok_or_else(|| {
            Error::MalformedPage(format!("page {} is out of range", index + 1))
        })
    }

    fn output_record(&self, page: OutputPage) -> Result<(ObjectId, f64, f64)> {
        self.output_pages.get(page.0).copied().ok_or_else(|| {
            Error::MalformedPage(format!("output page {} was never created", page.0))
        })
    }

    /// Follow one level of indirection if `object` is a reference.
    fn resolve<'a>(&'a self, object: &'a Object) -> &'a Object {
        match object {
            Object::Reference(id) => self.source.get_object(*id).unwrap_or(object),
            _ => object,
        }
    }

    /// Look up a page attribute, walking the Parent chain for inheritable
    /// entries (MediaBox, Resources, Rotate).
    fn inherited<'a>(&'a self, page_id: ObjectId, key: &[u8]) -> Option<&'a Object> {
        let mut dict = self.source.get_object(page_id).ok()?.as_dict().ok()?;
        loop {
            if let Ok(value) = dict.get(key) {
                return Some(value);
            }
            match dict.get(b"Parent") {
                Ok(Object::Reference(parent)) => {
                    dict = self.source.get_object(*parent).ok()?.as_dict().ok()?;
                }
                _ => return None,
            }
        }
    }

    /// Media box of a source page as [x0, y0, x1, y1], corners normalized.
    fn media_rect(&self, index: usize) -> Result<[f64; 4]> {
        let page_id = self.page_id(index)?;
        let object = self.inherited(page_id, b"MediaBox").ok_or_else(|| {
            Error::MalformedPage(format!("page {} has no media box", index + 1))
        })?;
        let array = self.resolve(object).as_array().map_err(|_| {
            Error::MalformedPage(format!("page {} media box is not an array", index + 1))
        })?;
        if array.len() < 4 {
            return Err(Error::MalformedPage(format!(
                "page {} media box has {} entries",
                index + 1,
                array.len()
            )));
        }

        let mut rect = [0.0; 4];
        for (slot, entry) in rect.iter_mut().zip(array.iter()) {
            *slot = to_f64(self.resolve(entry)).ok_or_else(|| {
                Error::MalformedPage(format!(
                    "page {} media box entry is not a number",
                    index + 1
                ))
            })?;
        }
        if rect[0] > rect[2] {
            rect.swap(0, 2);
        }
        if rect[1] > rect[3] {
            rect.swap(1, 3);
        }
        Ok(rect)
    }

    /// Concatenated decompressed content streams of a source page.
    fn page_content(&self, page_id: ObjectId) -> Result<Vec<u8>> {
        let dict = self.source.get_object(page_id)?.as_dict()?;
        let mut content = Vec::new();
        match dict.get(b"Contents") {
            Ok(Object::Reference(id)) => self.append_content_stream(&mut content, *id),
            Ok(Object::Array(parts)) => {
                for part in parts {
                    if let Object::Reference(id) = part {
                        self.append_content_stream(&mut content, *id);
                    }
                }
            }
            _ => {}
        }
        Ok(content)
    }

    fn append_content_stream(&self, content: &mut Vec<u8>, id: ObjectId) {
        if let Ok(stream) = self.source.get_object(id).and_then(Object::as_stream) {
            // Decompress when a filter is present, raw content otherwise.
            let data = stream
                .decompressed_content()
                .unwrap_or_else(|_| stream.content.clone());
            content.extend_from_slice(&data);
            content.push(b'\n');
        }
    }

    /// Copy a source page into the output as a Form XObject.
    fn import_page_form(&mut self, page_id: ObjectId, rect: [f64; 4]) -> Result<ObjectId> {
        let content = self.page_content(page_id)?;
        let resources = self.inherited(page_id, b"Resources").cloned();

        let mut dict = Dictionary::new();
        dict.set("Type", Object::Name(b"XObject".to_vec()));
        dict.set("Subtype", Object::Name(b"Form".to_vec()));
        dict.set("FormType", Object::Integer(1));
        dict.set(
            "BBox",
            Object::Array(vec![
                Object::Real(rect[0] as f32),
                Object::Real(rect[1] as f32),
                Object::Real(rect[2] as f32),
                Object::Real(rect[3] as f32),
            ]),
        );
        if let Some(resources) = resources {
            let copied =
                copy_object_deep(&self.source, &mut self.output, &resources, &mut self.copied)?;
            dict.set("Resources", copied);
        }

        Ok(self.output.add_object(Stream::new(dict, content)))
    }

    /// First image in a resources tree, recursing into Form XObjects.
    fn find_image(&self, resources: &Object, visited: &mut HashSet<ObjectId>) -> Option<ImageSize> {
        let resources = self.resolve(resources).as_dict().ok()?;
        let xobjects = self.resolve(resources.get(b"XObject").ok()?).as_dict().ok()?;

        for (_name, value) in xobjects.iter() {
            let id = match value {
                Object::Reference(id) => *id,
                _ => continue,
            };
            if !visited.insert(id) {
                continue;
            }
            let stream = match self.source.get_object(id).and_then(Object::as_stream) {
                Ok(stream) => stream,
                Err(_) => continue,
            };
            if let Ok(Object::Name(subtype)) = stream.dict.get(b"Subtype") {
                match subtype.as_slice() {
                    b"Image" => {
                        let width = stream
                            .dict
                            .get(b"Width")
                            .ok()
                            .and_then(|object| self.resolve(object).as_i64().ok());
                        let height = stream
                            .dict
                            .get(b"Height")
                            .ok()
                            .and_then(|object| self.resolve(object).as_i64().ok());
                        if let (Some(width), Some(height)) = (width, height) {
                            return Some(ImageSize { width, height });
                        }
                    }
                    b"Form" => {
                        if let Ok(inner) = stream.dict.get(b"Resources") {
                            if let Some(found) = self.find_image(inner, visited) {
                                return Some(found);
                            }
                        }
                    }
                    _ => {}
                }
            }
        }
        None
    }
}

impl DocumentIo for LopdfBackend {
    fn page_count(&self) -> usize {
        self.source_pages.len()
    }

    fn media_box(&self, index: usize) -> Result<(f64, f64)> {
        let rect = self.media_rect(index)?;
        Ok((rect[2] - rect[0], rect[3] - rect[1]))
    }

    fn rotation(&self, index: usize) -> Result<i64> {
        let page_id = self.page_id(index)?;
        match self.inherited(page_id, b"Rotate") {
            Some(object) => Ok(self.resolve(object).as_i64().unwrap_or(0)),
            None => Ok(0),
        }
    }

    fn reset_rotation(&mut self, index: usize) -> Result<()> {
        let page_id = self.page_id(index)?;
        let page_object = self.source.get_object_mut(page_id)?;
        if let Object::Dictionary(ref mut dict) = page_object {
            // Set rather than remove, so an inherited value is overridden too.
            dict.set("Rotate", Object::Integer(0));
        }
        Ok(())
    }

    fn first_image_size(&self, index: usize) -> Result<Option<ImageSize>> {
        let page_id = self.page_id(index)?;
        let resources = match self.inherited(page_id, b"Resources") {
            Some(resources) => resources,
            None => return Ok(None),
        };
        let mut visited = HashSet::new();
        Ok(self.find_image(resources, &mut visited))
    }

    fn new_page(&mut self, width: f64, height: f64) -> Result<OutputPage> {
        let mut page = Dictionary::new();
        page.set("Type", Object::Name(b"Page".to_vec()));
        page.set(
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(width as f32),
                Object::Real(height as f32),
            ]),
        );
        let page_id = self.output.add_object(page);
        self.output_pages.push((page_id, width, height));
        Ok(OutputPage(self.output_pages.len() - 1))
    }

    fn place_page(&mut self, page: OutputPage, index: usize) -> Result<()> {
        let (page_id, width, height) = self.output_record(page)?;
        let source_id = self.page_id(index)?;
        let rect = self.media_rect(index)?;

        let source_width = rect[2] - rect[0];
        let source_height = rect[3] - rect[1];
        if source_width == 0.0 || source_height == 0.0 {
            return Err(Error::MalformedPage(format!(
                "page {} has a degenerate media box",
                index + 1
            )));
        }

        let form_id = self.import_page_form(source_id, rect)?;

        // Map the source media box onto the full output rectangle. The axes
        // scale independently, so content stretches when the shapes differ.
        let scale_x = width / source_width;
        let scale_y = height / source_height;
        let offset_x = (0.0 - rect[0]) * scale_x;
        let offset_y = (0.0 - rect[1]) * scale_y;
        let content = format!(
            "q\n{} 0 0 {} {} {} cm\n/Src Do\nQ\n",
            scale_x, scale_y, offset_x, offset_y
        );
        let content_id = self
            .output
            .add_object(Stream::new(Dictionary::new(), content.into_bytes()));

        let mut xobjects = Dictionary::new();
        xobjects.set("Src", Object::Reference(form_id));
        let mut resources = Dictionary::new();
        resources.set("XObject", Object::Dictionary(xobjects));

        let page_object = self.output.get_object_mut(page_id)?;
        if let Object::Dictionary(ref mut dict) = page_object {
            dict.set("Contents", Object::Reference(content_id));
            dict.set("Resources", Object::Dictionary(resources));
        }
        Ok(())
    }

    fn set_rotation(&mut self, page: OutputPage, degrees: i64) -> Result<()> {
        let (page_id, _, _) = self.output_record(page)?;
        let page_object = self.output.get_object_mut(page_id)?;
        if let Object::Dictionary(ref mut dict) = page_object {
            dict.set("Rotate", Object::Integer(degrees));
        }
        Ok(())
    }

    fn save(&mut self, path: &Path) -> Result<()> {
        let pages_id = self.output.new_object_id();

        let kids: Vec<Object> = self
            .output_pages
            .iter()
            .map(|&(id, _, _)| Object::Reference(id))
            .collect();

        let mut pages_object = Dictionary::new();
        pages_object.set("Type", Object::Name(b"Pages".to_vec()));
        pages_object.set("Count", Object::Integer(self.output_pages.len() as i64));
        pages_object.set("Kids", Object::Array(kids));

        let catalog_id = self.output.new_object_id();
        let mut catalog = Dictionary::new();
        catalog.set("Type", Object::Name(b"Catalog".to_vec()));
        catalog.set("Pages", Object::Reference(pages_id));

        self.output.objects.insert(pages_id, Object::Dictionary(pages_object));
        self.output.objects.insert(catalog_id, Object::Dictionary(catalog));
        self.output.trailer.set("Root", Object::Reference(catalog_id));

        // Update parent references for all pages
        for &(page_id, _, _) in &self.output_pages {
            if let Ok(page_object) = self.output.get_object_mut(page_id) {
                if let Object::Dictionary(ref mut dict) = page_object {
                    dict.set("Parent", Object::Reference(pages_id));
                }
            }
        }

        self.output.compress();
        self.output.save(path)?;
        Ok(())
    }
}

/// Numeric value of an Integer or Real object.
fn to_f64(object: &Object) -> Option<f64> {
    match object {
        Object::Integer(value) => Some(*value as f64),
        Object::Real(value) => Some(f64::from(*value)),
        _ => None,
    }
}

/// Deep-copy an object graph from `source` into `output`.
///
/// `copied` maps source ids to output ids across calls, so resources
/// shared between pages are copied once. A reference is mapped before its
/// target is descended into, which lets cyclic graphs terminate.
fn copy_object_deep(
    source: &Document,
    output: &mut Document,
    object: &Object,
    copied: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Object> {
    match object {
        Object::Reference(id) => {
            if let Some(&new_id) = copied.get(id) {
                return Ok(Object::Reference(new_id));
            }
            let new_id = output.new_object_id();
            copied.insert(*id, new_id);
            let target = match source.get_object(*id) {
                Ok(referenced) => copy_object_deep(source, output, referenced, copied)?,
                // Dangling reference in the source; keep the slot valid.
                Err(_) => Object::Null,
            };
            output.objects.insert(new_id, target);
            Ok(Object::Reference(new_id))
        }
        Object::Array(items) => {
            let mut copied_items = Vec::with_capacity(items.len());
            for item in items {
                copied_items.push(copy_object_deep(source, output, item, copied)?);
            }
            Ok(Object::Array(copied_items))
        }
        Object::Dictionary(dict) => {
            let mut copied_dict = Dictionary::new();
            for (key, value) in dict.iter() {
                copied_dict.set(key.clone(), copy_object_deep(source, output, value, copied)?);
            }
            Ok(Object::Dictionary(copied_dict))
        }
        Object::Stream(stream) => {
            let mut copied_dict = Dictionary::new();
            for (key, value) in stream.dict.iter() {
                copied_dict.set(key.clone(), copy_object_deep(source, output, value, copied)?);
            }
            Ok(Object::Stream(Stream {
                dict: copied_dict,
                content: stream.content.clone(),
                allows_compression: stream.allows_compression,
                start_position: stream.start_position,
            }))
        }
        _ => Ok(object.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_page_document(
        media: [i64; 4],
        rotation: Option<i64>,
        image: Option<(i64, i64)>,
    ) -> Document {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let content_id = doc.add_object(Stream::new(
            Dictionary::new(),
            b"0 0 m 10 10 l S\n".to_vec(),
        ));

        let mut resources = Dictionary::new();
        if let Some((width, height)) = image {
            let mut image_dict = Dictionary::new();
            image_dict.set("Type", Object::Name(b"XObject".to_vec()));
            image_dict.set("Subtype", Object::Name(b"Image".to_vec()));
            image_dict.set("Width", Object::Integer(width));
            image_dict.set("Height", Object::Integer(height));
            image_dict.set("ColorSpace", Object::Name(b"DeviceGray".to_vec()));
            image_dict.set("BitsPerComponent", Object::Integer(8));
            let image_id = doc.add_object(Stream::new(image_dict, vec![0u8; 4]));
            let mut xobjects = Dictionary::new();
            xobjects.set("Im0", Object::Reference(image_id));
            resources.set("XObject", Object::Dictionary(xobjects));
        }

        let mut page = Dictionary::new();
        page.set("Type", Object::Name(b"Page".to_vec()));
        page.set("Parent", Object::Reference(pages_id));
        page.set(
            "MediaBox",
            Object::Array(media.iter().map(|&v| Object::Integer(v)).collect()),
        );
        page.set("Contents", Object::Reference(content_id));
        page.set("Resources", Object::Dictionary(resources));
        if let Some(rotation) = rotation {
            page.set("Rotate", Object::Integer(rotation));
        }
        let page_id = doc.add_object(page);

        let mut pages = Dictionary::new();
        pages.set("Type", Object::Name(b"Pages".to_vec()));
        pages.set("Kids", Object::Array(vec![Object::Reference(page_id)]));
        pages.set("Count", Object::Integer(1));
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let mut catalog = Dictionary::new();
        catalog.set("Type", Object::Name(b"Catalog".to_vec()));
        catalog.set("Pages", Object::Reference(pages_id));
        let catalog_id = doc.add_object(catalog);
        doc.trailer.set("Root", Object::Reference(catalog_id));

        doc
    }

    #[test]
    fn test_media_box_dimensions() {
        let doc = single_page_document([0, 0, 612, 792], None, None);
        let backend = LopdfBackend::from_document(doc);
        assert_eq!(backend.page_count(), 1);
        assert_eq!(backend.media_box(0).unwrap(), (612.0, 792.0));
    }

    #[test]
    fn test_media_box_with_offset_origin() {
        let doc = single_page_document([10, 20, 622, 812], None, None);
        let backend = LopdfBackend::from_document(doc);
        assert_eq!(backend.media_box(0).unwrap(), (612.0, 792.0));
    }

    #[test]
    fn test_media_box_inherited_from_pages_node() {
        let mut doc = single_page_document([0, 0, 612, 792], None, None);
        let page_id = doc.get_pages()[&1];
        let parent_id = doc
            .get_object(page_id)
            .unwrap()
            .as_dict()
            .unwrap()
            .get(b"Parent")
            .unwrap()
            .as_reference()
            .unwrap();

        let media = doc
            .get_object_mut(page_id)
            .unwrap()
            .as_dict_mut()
            .unwrap()
            .remove(b"MediaBox")
            .unwrap();
        doc.get_object_mut(parent_id)
            .unwrap()
            .as_dict_mut()
            .unwrap()
            .set("MediaBox", media);

        let backend = LopdfBackend::from_document(doc);
        assert_eq!(backend.media_box(0).unwrap(), (612.0, 792.0));
    }

    #[test]
    fn test_rotation_defaults_to_zero() {
        let doc = single_page_document([0, 0, 612, 792], None, None);
        let backend = LopdfBackend::from_document(doc);
        assert_eq!(backend.rotation(0).unwrap(), 0);
    }

    #[test]
    fn test_rotation_read_and_reset() {
        let doc = single_page_document([0, 0, 612, 792], Some(270), None);
        let mut backend = LopdfBackend::from_document(doc);
        assert_eq!(backend.rotation(0).unwrap(), 270);
        backend.reset_rotation(0).unwrap();
        assert_eq!(backend.rotation(0).unwrap(), 0);
    }

    #[test]
    fn test_reset_overrides_inherited_rotation() {
        let mut doc = single_page_document([0, 0, 612, 792], None, None);
        let page_id = doc.get_pages()[&1];
        let parent_id = doc
            .get_object(page_id)
            .unwrap()
            .as_dict()
            .unwrap()
            .get(b"Parent")
            .unwrap()
            .as_reference()
            .unwrap();
        doc.get_object_mut(parent_id)
            .unwrap()
            .as_dict_mut()
            .unwrap()
            .set("Rotate", Object::Integer(90));

        let mut backend = LopdfBackend::from_document(doc);
        assert_eq!(backend.rotation(0).unwrap(), 90);

        // The page gets its own Rotate 0, shadowing the Pages entry.
        backend.reset_rotation(0).unwrap();
        assert_eq!(backend.rotation(0).unwrap(), 0);
    }

    #[test]
    fn test_first_image_size() {
        let doc = single_page_document([0, 0, 612, 792], None, Some((800, 500)));
        let backend = LopdfBackend::from_document(doc);
        assert_eq!(
            backend.first_image_size(0).unwrap(),
            Some(ImageSize {
                width: 800,
                height: 500
            })
        );
    }

    #[test]
    fn test_first_image_size_without_images() {
        let doc = single_page_document([0, 0, 612, 792], None, None);
        let backend = LopdfBackend::from_document(doc);
        assert_eq!(backend.first_image_size(0).unwrap(), None);
    }

    #[test]
    fn test_first_image_found_inside_form_xobject() {
        let mut doc = single_page_document([0, 0, 612, 792], None, None);
        let page_id = doc.get_pages()[&1];

        let mut image_dict = Dictionary::new();
        image_dict.set("Type", Object::Name(b"XObject".to_vec()));
        image_dict.set("Subtype", Object::Name(b"Image".to_vec()));
        image_dict.set("Width", Object::Integer(640));
        image_dict.set("Height", Object::Integer(640));
        let image_id = doc.add_object(Stream::new(image_dict, vec![0u8; 4]));

        let mut inner_xobjects = Dictionary::new();
        inner_xobjects.set("Im0", Object::Reference(image_id));
        let mut inner_resources = Dictionary::new();
        inner_resources.set("XObject", Object::Dictionary(inner_xobjects));

        let mut form_dict = Dictionary::new();
        form_dict.set("Type", Object::Name(b"XObject".to_vec()));
        form_dict.set("Subtype", Object::Name(b"Form".to_vec()));
        form_dict.set("Resources", Object::Dictionary(inner_resources));
        let form_id = doc.add_object(Stream::new(form_dict, Vec::new()));

        let mut xobjects = Dictionary::new();
        xobjects.set("F0", Object::Reference(form_id));
        let mut resources = Dictionary::new();
        resources.set("XObject", Object::Dictionary(xobjects));
        doc.get_object_mut(page_id)
            .unwrap()
            .as_dict_mut()
            .unwrap()
            .set("Resources", Object::Dictionary(resources));

        let backend = LopdfBackend::from_document(doc);
        assert_eq!(
            backend.first_image_size(0).unwrap(),
            Some(ImageSize {
                width: 640,
                height: 640
            })
        );
    }

    #[test]
    fn test_place_page_scales_content_to_fill() {
        let doc = single_page_document([0, 0, 400, 400], None, None);
        let mut backend = LopdfBackend::from_document(doc);
        let page = backend.new_page(595.0, 842.0).unwrap();
        backend.place_page(page, 0).unwrap();

        let (page_id, _, _) = backend.output_pages[0];
        let page_dict = backend
            .output
            .get_object(page_id)
            .unwrap()
            .as_dict()
            .unwrap();
        let content_id = page_dict
            .get(b"Contents")
            .unwrap()
            .as_reference()
            .unwrap();
        let stream = backend
            .output
            .get_object(content_id)
            .unwrap()
            .as_stream()
            .unwrap();
        let text = String::from_utf8(stream.content.clone()).unwrap();
        assert!(
            text.contains("1.4875 0 0 2.105 0 0 cm"),
            "unexpected matrix: {}",
            text
        );
        assert!(text.contains("/Src Do"));
    }

    #[test]
    fn test_place_page_translates_offset_origin() {
        let doc = single_page_document([10, 20, 622, 812], None, None);
        let mut backend = LopdfBackend::from_document(doc);
        let page = backend.new_page(612.0, 792.0).unwrap();
        backend.place_page(page, 0).unwrap();

        let (page_id, _, _) = backend.output_pages[0];
        let page_dict = backend
            .output
            .get_object(page_id)
            .unwrap()
            .as_dict()
            .unwrap();
        let content_id = page_dict
            .get(b"Contents")
            .unwrap()
            .as_reference()
            .unwrap();
        let stream = backend
            .output
            .get_object(content_id)
            .unwrap()
            .as_stream()
            .unwrap();
        let text = String::from_utf8(stream.content.clone()).unwrap();
        assert!(
            text.contains("1 0 0 1 -10 -20 cm"),
            "unexpected matrix: {}",
            text
        );
    }

    #[test]
    fn test_place_page_concatenates_content_array() {
        let mut doc = single_page_document([0, 0, 400, 400], None, None);
        let page_id = doc.get_pages()[&1];
        let first = doc.add_object(Stream::new(
            Dictionary::new(),
            b"0 0 m 10 10 l S\n".to_vec(),
        ));
        let second = doc.add_object(Stream::new(
            Dictionary::new(),
            b"20 20 m 30 30 l S\n".to_vec(),
        ));
        doc.get_object_mut(page_id)
            .unwrap()
            .as_dict_mut()
            .unwrap()
            .set(
                "Contents",
                Object::Array(vec![Object::Reference(first), Object::Reference(second)]),
            );

        let mut backend = LopdfBackend::from_document(doc);
        let page = backend.new_page(400.0, 400.0).unwrap();
        backend.place_page(page, 0).unwrap();

        let (page_id, _, _) = backend.output_pages[0];
        let form_id = backend
            .output
            .get_object(page_id)
            .unwrap()
            .as_dict()
            .unwrap()
            .get(b"Resources")
            .unwrap()
            .as_dict()
            .unwrap()
            .get(b"XObject")
            .unwrap()
            .as_dict()
            .unwrap()
            .get(b"Src")
            .unwrap()
            .as_reference()
            .unwrap();
        let form = backend
            .output
            .get_object(form_id)
            .unwrap()
            .as_stream()
            .unwrap();
        let text = String::from_utf8(form.content.clone()).unwrap();
        assert!(text.contains("0 0 m 10 10 l S"));
        assert!(text.contains("20 20 m 30 30 l S"));
    }

    #[test]
    fn test_deep_copy_shares_repeated_references() {
        let mut source = Document::with_version("1.5");
        let shared_id = source.add_object(Object::Integer(7));
        let mut output = Document::with_version("1.5");
        let mut copied = HashMap::new();

        let array = Object::Array(vec![
            Object::Reference(shared_id),
            Object::Reference(shared_id),
        ]);
        let result = copy_object_deep(&source, &mut output, &array, &mut copied).unwrap();

        match result {
            Object::Array(items) => {
                let first = items[0].as_reference().unwrap();
                let second = items[1].as_reference().unwrap();
                assert_eq!(first, second);
            }
            other => panic!("expected array, got {:?}", other),
        }
        assert_eq!(copied.len(), 1);
    }

    #[test]
    fn test_deep_copy_survives_reference_cycles() {
        let mut source = Document::with_version("1.5");
        let a_id = source.new_object_id();
        let b_id = source.new_object_id();
        let mut a = Dictionary::new();
        a.set("Next", Object::Reference(b_id));
        let mut b = Dictionary::new();
        b.set("Next", Object::Reference(a_id));
        source.objects.insert(a_id, Object::Dictionary(a));
        source.objects.insert(b_id, Object::Dictionary(b));

        let mut output = Document::with_version("1.5");
        let mut copied = HashMap::new();
        let result =
            copy_object_deep(&source, &mut output, &Object::Reference(a_id), &mut copied).unwrap();

        assert!(result.as_reference().is_ok());
        assert_eq!(copied.len(), 2);
    }
}
