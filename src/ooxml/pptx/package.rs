//! Package writer for PowerPoint presentations.
//!
//! Serialises a [`MutablePresentation`] into an OPC (ZIP) package, writing
//! `[Content_Types].xml`, the package relationships, and every part together
//! with its `_rels` companion.
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::{content_type as ct, namespace, relationship_type as rt};
use crate::ooxml::opc::packuri::{CONTENT_TYPES_URI, PACKAGE_URI, PackURI};
use crate::ooxml::opc::rel::Relationships;
use crate::ooxml::pptx::template;
use crate::ooxml::pptx::writer::MutablePresentation;
use crate::common::xml::escape_xml;
use std::collections::BTreeMap;
use std::io::{Cursor, Write};
use std::path::Path;
use zip::write::{SimpleFileOptions, ZipWriter};

const PRESENTATION_URI: &str = "/ppt/presentation.xml";
const SLIDE_MASTER_URI: &str = "/ppt/slideMasters/slideMaster1.xml";
const SLIDE_LAYOUT_URI: &str = "/ppt/slideLayouts/slideLayout1.xml";
const THEME_URI: &str = "/ppt/theme/theme1.xml";
const PRES_PROPS_URI: &str = "/ppt/presProps.xml";
const VIEW_PROPS_URI: &str = "/ppt/viewProps.xml";
const TABLE_STYLES_URI: &str = "/ppt/tableStyles.xml";
const CORE_PROPS_URI: &str = "/docProps/core.xml";
const APP_PROPS_URI: &str = "/docProps/app.xml";

/// A serialised part waiting to be written to the archive.
struct Part {
    partname: PackURI,
    content_type: &'static str,
    blob: Vec<u8>,
    rels: Relationships,
}

impl Part {
    fn new(partname: PackURI, content_type: &'static str, blob: impl Into<Vec<u8>>) -> Self {
        let rels = Relationships::new(partname.base_uri());
        Self {
            partname,
            content_type,
            blob: blob.into(),
            rels,
        }
    }
}

/// Package writer that serializes a presentation to a ZIP file.
pub struct PackageWriter;

impl PackageWriter {
    /// Write a presentation to a file.
    ///
    /// # Arguments
    /// * `path` - Path where the package should be written
    /// * `pres` - The presentation to write
    pub fn write<P: AsRef<Path>>(path: P, pres: &MutablePresentation) -> Result<()> {
        let bytes = Self::to_bytes(pres)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Serialize a presentation to package bytes.
    pub fn to_bytes(pres: &MutablePresentation) -> Result<Vec<u8>> {
        let (pkg_rels, parts) = Self::assemble(pres)?;

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

        let content_types = ContentTypesItem::from_parts(&parts).to_xml();
        zip.start_file(&CONTENT_TYPES_URI[1..], deflated())?;
        zip.write_all(content_types.as_bytes())?;

        let package_uri = partname(PACKAGE_URI)?;
        zip.start_file(package_uri.rels_uri().membername(), deflated())?;
        zip.write_all(pkg_rels.to_xml().as_bytes())?;

        for part in &parts {
            zip.start_file(part.partname.membername(), deflated())?;
            zip.write_all(&part.blob)?;

            if !part.rels.is_empty() {
                zip.start_file(part.partname.rels_uri().membername(), deflated())?;
                zip.write_all(part.rels.to_xml().as_bytes())?;
            }
        }

        Ok(zip.finish()?.into_inner())
    }

    /// Build every part of the package and the package-level relationships.
    fn assemble(pres: &MutablePresentation) -> Result<(Relationships, Vec<Part>)> {
        let pres_uri = partname(PRESENTATION_URI)?;
        let master_uri = partname(SLIDE_MASTER_URI)?;
        let layout_uri = partname(SLIDE_LAYOUT_URI)?;
        let theme_uri = partname(THEME_URI)?;
        let pres_props_uri = partname(PRES_PROPS_URI)?;
        let view_props_uri = partname(VIEW_PROPS_URI)?;
        let table_styles_uri = partname(TABLE_STYLES_URI)?;
        let core_uri = partname(CORE_PROPS_URI)?;
        let app_uri = partname(APP_PROPS_URI)?;

        let mut pkg_rels = Relationships::new(PACKAGE_URI);
        pkg_rels.add(rt::OFFICE_DOCUMENT, &pres_uri);
        pkg_rels.add(rt::CORE_PROPERTIES, &core_uri);
        pkg_rels.add(rt::EXTENDED_PROPERTIES, &app_uri);

        let mut parts = Vec::with_capacity(pres.slide_count() + 9);

        // Presentation part: master first, then slides, then the property parts
        let mut pres_rels = Relationships::new(pres_uri.base_uri());
        let master_rel_id = pres_rels.add(rt::SLIDE_MASTER, &master_uri);

        let mut slide_rel_ids = Vec::with_capacity(pres.slide_count());
        let mut slide_parts = Vec::with_capacity(pres.slide_count());
        for (index, slide) in pres.slides().iter().enumerate() {
            let slide_uri = partname(&format!("/ppt/slides/slide{}.xml", index + 1))?;
            slide_rel_ids.push(pres_rels.add(rt::SLIDE, &slide_uri));

            let mut part = Part::new(slide_uri, ct::PML_SLIDE, slide.to_xml()?);
            part.rels.add(rt::SLIDE_LAYOUT, &layout_uri);
            slide_parts.push(part);
        }

        pres_rels.add(rt::PRES_PROPS, &pres_props_uri);
        pres_rels.add(rt::VIEW_PROPS, &view_props_uri);
        pres_rels.add(rt::THEME, &theme_uri);
        pres_rels.add(rt::TABLE_STYLES, &table_styles_uri);

        let pres_xml = pres.generate_presentation_xml(&master_rel_id, &slide_rel_ids)?;
        let mut pres_part = Part::new(pres_uri, ct::PML_PRESENTATION_MAIN, pres_xml);
        pres_part.rels = pres_rels;
        parts.push(pres_part);

        // Slide master: layout is rId1 and theme rId2, matching the template
        let mut master = Part::new(
            master_uri.clone(),
            ct::PML_SLIDE_MASTER,
            template::default_slide_master_xml(),
        );
        master.rels.add(rt::SLIDE_LAYOUT, &layout_uri);
        master.rels.add(rt::THEME, &theme_uri);
        parts.push(master);

        let mut layout = Part::new(
            layout_uri,
            ct::PML_SLIDE_LAYOUT,
            template::blank_slide_layout_xml(),
        );
        layout.rels.add(rt::SLIDE_MASTER, &master_uri);
        parts.push(layout);

        parts.extend(slide_parts);

        parts.push(Part::new(theme_uri, ct::OFC_THEME, template::default_theme_xml()));
        parts.push(Part::new(
            pres_props_uri,
            ct::PML_PRES_PROPS,
            template::default_pres_props_xml(),
        ));
        parts.push(Part::new(
            view_props_uri,
            ct::PML_VIEW_PROPS,
            template::default_view_props_xml(),
        ));
        parts.push(Part::new(
            table_styles_uri,
            ct::PML_TABLE_STYLES,
            template::default_table_styles_xml(),
        ));
        parts.push(Part::new(
            core_uri,
            ct::OPC_CORE_PROPERTIES,
            template::core_props_xml(pres.title()),
        ));
        parts.push(Part::new(
            app_uri,
            ct::OFC_EXTENDED_PROPERTIES,
            template::app_props_xml(pres.slide_count()),
        ));

        Ok((pkg_rels, parts))
    }
}

fn deflated() -> SimpleFileOptions {
    SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated)
}

fn partname(uri: &str) -> Result<PackURI> {
    PackURI::new(uri).map_err(OoxmlError::InvalidFormat)
}

/// Helper for building [Content_Types].xml content.
///
/// Manages Default and Override elements for content type mapping.
struct ContentTypesItem {
    /// Default content types by extension
    defaults: BTreeMap<String, String>,

    /// Override content types by partname
    overrides: BTreeMap<String, String>,
}

impl ContentTypesItem {
    fn new() -> Self {
        let mut defaults = BTreeMap::new();
        defaults.insert("rels".to_string(), ct::OPC_RELATIONSHIPS.to_string());
        defaults.insert("xml".to_string(), ct::XML.to_string());

        Self {
            defaults,
            overrides: BTreeMap::new(),
        }
    }

    fn from_parts(parts: &[Part]) -> Self {
        let mut cti = Self::new();
        for part in parts {
            cti.add_content_type(&part.partname, part.content_type);
        }
        cti
    }

    /// Add a content type for a part.
    ///
    /// Uses the default mapping if the extension already maps to this type,
    /// otherwise an override for the specific partname.
    fn add_content_type(&mut self, partname: &PackURI, content_type: &str) {
        if self.defaults.get(partname.ext()).map(String::as_str) != Some(content_type) {
            self.overrides
                .insert(partname.to_string(), content_type.to_string());
        }
    }

    /// Generate the XML for [Content_Types].xml.
    fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(r#"<Types xmlns=""#);
        xml.push_str(namespace::OPC_CONTENT_TYPES);
        xml.push_str(r#"">"#);

        for (ext, content_type) in &self.defaults {
            xml.push_str(&format!(
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                escape_xml(ext),
                escape_xml(content_type)
            ));
        }

        for (partname, content_type) in &self.overrides {
            xml.push_str(&format!(
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                escape_xml(partname),
                escape_xml(content_type)
            ));
        }

        xml.push_str("</Types>");

        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::unit::EmuRect;
    use std::io::Read;

    fn read_member(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut file = archive.by_name(name).unwrap();
        let mut content = String::new();
        file.read_to_string(&mut content).unwrap();
        content
    }

    fn assert_well_formed(xml: &str) {
        let mut reader = quick_xml::Reader::from_str(xml);
        loop {
            match reader.read_event() {
                Ok(quick_xml::events::Event::Eof) => break,
                Ok(_) => {},
                Err(e) => panic!("malformed XML: {e}\n{xml}"),
            }
        }
    }

    fn sample_presentation() -> MutablePresentation {
        let mut pres = MutablePresentation::new();
        pres.set_title("Sample");
        for i in 0..3 {
            pres.add_slide()
                .add_text_box(&format!("Slide {i}"), EmuRect::from_cm(1.0, 1.0, 10.0, 2.0));
        }
        pres
    }

    #[test]
    fn test_content_types_xml() {
        let master = PackURI::new(SLIDE_MASTER_URI).unwrap();
        let mut cti = ContentTypesItem::new();
        cti.add_content_type(&master, ct::PML_SLIDE_MASTER);

        let xml = cti.to_xml();
        assert!(xml.contains(r#"<Default Extension="rels""#));
        assert!(xml.contains(r#"<Override PartName="/ppt/slideMasters/slideMaster1.xml""#));
    }

    #[test]
    fn test_package_members() {
        let bytes = sample_presentation().to_bytes().unwrap();
        assert_eq!(&bytes[0..4], &[0x50, 0x4B, 0x03, 0x04]);

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();
        let names: Vec<String> = archive.file_names().map(str::to_string).collect();
        for expected in [
            "[Content_Types].xml",
            "_rels/.rels",
            "ppt/presentation.xml",
            "ppt/_rels/presentation.xml.rels",
            "ppt/slideMasters/slideMaster1.xml",
            "ppt/slideMasters/_rels/slideMaster1.xml.rels",
            "ppt/slideLayouts/slideLayout1.xml",
            "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
            "ppt/slides/slide1.xml",
            "ppt/slides/slide3.xml",
            "ppt/slides/_rels/slide3.xml.rels",
            "ppt/theme/theme1.xml",
            "docProps/core.xml",
            "docProps/app.xml",
        ] {
            assert!(names.iter().any(|n| n == expected), "missing {expected}");
        }
        assert_eq!(archive.by_index(0).unwrap().name(), "[Content_Types].xml");

        // Every member is well-formed XML
        for i in 0..archive.len() {
            let mut file = archive.by_index(i).unwrap();
            let mut content = String::new();
            file.read_to_string(&mut content).unwrap();
            assert_well_formed(&content);
        }
    }

    #[test]
    fn test_relationship_wiring() {
        let bytes = sample_presentation().to_bytes().unwrap();

        let pres_rels = read_member(&bytes, "ppt/_rels/presentation.xml.rels");
        assert!(pres_rels.contains(r#"Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster""#));
        assert!(pres_rels.contains(r#"Target="slides/slide3.xml""#));

        let pres_xml = read_member(&bytes, "ppt/presentation.xml");
        assert!(pres_xml.contains(r#"<p:sldId id="256" r:id="rId2"/>"#));
        assert!(pres_xml.contains(r#"<p:sldId id="258" r:id="rId4"/>"#));

        let slide_rels = read_member(&bytes, "ppt/slides/_rels/slide2.xml.rels");
        assert!(slide_rels.contains(r#"Target="../slideLayouts/slideLayout1.xml""#));

        let content_types = read_member(&bytes, "[Content_Types].xml");
        assert!(content_types.contains(r#"<Override PartName="/ppt/slides/slide3.xml""#));
        assert!(content_types.contains(ct::PML_PRESENTATION_MAIN));

        let core = read_member(&bytes, "docProps/core.xml");
        assert!(core.contains("<dc:title>Sample</dc:title>"));
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.pptx");
        PackageWriter::write(&path, &sample_presentation()).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.pptx");
        let err = PackageWriter::write(&path, &sample_presentation()).unwrap_err();
        assert!(matches!(err, OoxmlError::Io(_)));
        assert!(!path.exists());
    }
}
