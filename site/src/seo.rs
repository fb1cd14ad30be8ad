use crate::config::SiteMeta;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum PageKind {
    #[default]
    Website,
    Article,
}

impl PageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PageKind::Website => "website",
            PageKind::Article => "article",
        }
    }
}

// what a page asks for; anything left unset falls back to the site defaults
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageMeta {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub image: Option<String>,
    pub kind: PageKind,
    pub no_index: bool,
}

impl PageMeta {
    pub fn titled(title: impl Into<String>) -> Self {
        PageMeta {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn article(mut self) -> Self {
        self.kind = PageKind::Article;
        self
    }

    pub fn no_index(mut self) -> Self {
        self.no_index = true;
        self
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetaAttr {
    Name,
    Property,
}

impl MetaAttr {
    pub fn as_str(self) -> &'static str {
        match self {
            MetaAttr::Name => "name",
            MetaAttr::Property => "property",
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MetaTag {
    pub attr: MetaAttr,
    pub key: &'static str,
    pub content: String,
}

// the fully resolved head contents for one page
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HeadTags {
    pub title: String,
    pub canonical: String,
    pub meta: Vec<MetaTag>,
}

impl HeadTags {
    pub fn resolve(page: &PageMeta, site: &SiteMeta, canonical: impl Into<String>) -> Self {
        let title = match &page.title {
            Some(title) => format!("{title} | {}", site.legal_name),
            None => site.default_title.clone(),
        };
        let description = page.description.as_deref().unwrap_or(&site.description);
        let keywords = page.keywords.as_deref().unwrap_or(&site.keywords);
        let image = page.image.as_deref().unwrap_or(&site.image);
        let canonical = canonical.into();
        let robots = if page.no_index {
            "noindex,nofollow"
        } else {
            "index,follow"
        };

        let name = |key, content: &str| MetaTag {
            attr: MetaAttr::Name,
            key,
            content: content.to_owned(),
        };
        let property = |key, content: &str| MetaTag {
            attr: MetaAttr::Property,
            key,
            content: content.to_owned(),
        };

        let meta = vec![
            name("description", description),
            name("keywords", keywords),
            name("robots", robots),
            property("og:title", title.as_str()),
            property("og:description", description),
            property("og:type", page.kind.as_str()),
            property("og:url", canonical.as_str()),
            property("og:image", image),
            property("og:site_name", site.legal_name.as_str()),
            name("twitter:card", "summary_large_image"),
            name("twitter:title", title.as_str()),
            name("twitter:description", description),
            name("twitter:image", image),
        ];

        HeadTags {
            title,
            canonical,
            meta,
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.meta
            .iter()
            .find(|m| m.key == key)
            .map(|m| m.content.as_str())
    }
}
