//! Media location: walk outward from a pointer-hover target to the nearest
//! qualifying media element.

use scraper::{ElementRef, Selector};

use crate::classify::{self, MediaType};

/// A located media element: the node itself, its kind, and the source URL
/// to preview and download. For animated media the displayed `<img>` is a
/// static preview frame, so `src` carries the backing video source when
/// one exists in the enclosing post.
#[derive(Debug, Clone)]
pub struct MediaDescriptor<'a> {
    pub element: ElementRef<'a>,
    pub media_type: MediaType,
    pub src: String,
}

/// Structural markers that identify a post/article container.
const POST_MARKERS: &str = "[data-testid=\"tweetText\"], [data-testid=\"cardWrapper\"], \
     [data-testid=\"tweetPhoto\"], [data-testid=\"videoComponent\"], \
     article, [role=\"article\"], .css-1dbjc4n";

/// Scope searched for the video backing an animated thumbnail.
const GIF_SCOPE_MARKERS: &str = "article, [role=\"article\"], [data-testid=\"tweetPhoto\"]";

/// Finds the qualifying media element for a hover target, or `None`.
///
/// Nodes outside a recognized post container never qualify, and neither do
/// profile avatars/banners even though they share the media host.
pub fn locate(node: ElementRef<'_>) -> Option<MediaDescriptor<'_>> {
    let post_markers = Selector::parse(POST_MARKERS).expect("post marker selector");
    closest(node, &post_markers)?;

    if node.value().name() == "img" {
        if let Some(descriptor) = locate_image(node) {
            return Some(descriptor);
        }
    }

    locate_via_anchor(node)
}

fn locate_image(img: ElementRef<'_>) -> Option<MediaDescriptor<'_>> {
    let src = img.value().attr("src")?;
    if !classify::is_platform_media(src) || classify::is_profile_asset(src) {
        return None;
    }
    if classify::is_animated(src) {
        let scope = Selector::parse(GIF_SCOPE_MARKERS).expect("gif scope selector");
        let src = closest(img, &scope)
            .and_then(video_source)
            .unwrap_or_else(|| src.to_string());
        return Some(MediaDescriptor {
            element: img,
            media_type: MediaType::Gif,
            src,
        });
    }
    Some(MediaDescriptor {
        element: img,
        media_type: MediaType::Image,
        src: src.to_string(),
    })
}

/// Hover targets that are not themselves media but sit in/near an anchor:
/// classify the anchor's first contained image instead.
fn locate_via_anchor(node: ElementRef<'_>) -> Option<MediaDescriptor<'_>> {
    let anchor_sel = Selector::parse("a").expect("anchor selector");
    let img_sel = Selector::parse("img").expect("img selector");
    let anchor = closest(node, &anchor_sel)?;
    let img = anchor.select(&img_sel).next()?;
    let src = img.value().attr("src")?;
    if !classify::is_platform_media(src) || classify::is_profile_asset(src) {
        return None;
    }
    let media_type = if classify::is_animated(src) {
        MediaType::Gif
    } else {
        MediaType::Image
    };
    Some(MediaDescriptor {
        element: img,
        media_type,
        src: src.to_string(),
    })
}

/// Source URL of the first `<video>` in `scope`: its own `src`, else the
/// `src` of a nested `<source>` element.
fn video_source(scope: ElementRef<'_>) -> Option<String> {
    let video_sel = Selector::parse("video").expect("video selector");
    let source_sel = Selector::parse("source").expect("source selector");
    let video = scope.select(&video_sel).next()?;
    if let Some(src) = video.value().attr("src").filter(|s| !s.is_empty()) {
        return Some(src.to_string());
    }
    let source = video.select(&source_sel).next()?;
    source
        .value()
        .attr("src")
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// DOM `closest()`: the element itself or its nearest ancestor matching
/// `selector`.
fn closest<'a>(node: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    std::iter::once(node)
        .chain(node.ancestors().filter_map(ElementRef::wrap))
        .find(|el| selector.matches(el))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn first<'a>(document: &'a Html, selector: &str) -> ElementRef<'a> {
        let sel = Selector::parse(selector).unwrap();
        document.select(&sel).next().expect("fixture element")
    }

    #[test]
    fn image_in_article_is_located() {
        let document = Html::parse_document(
            r#"<article><div data-testid="tweetPhoto">
                 <img src="https://pbs.twimg.com/media/ABC123.jpg?name=small">
               </div></article>"#,
        );
        let descriptor = locate(first(&document, "img")).expect("descriptor");
        assert_eq!(descriptor.media_type, MediaType::Image);
        assert_eq!(
            descriptor.src,
            "https://pbs.twimg.com/media/ABC123.jpg?name=small"
        );
    }

    #[test]
    fn image_outside_post_container_is_rejected() {
        let document = Html::parse_document(
            r#"<div><img src="https://pbs.twimg.com/media/ABC123.jpg"></div>"#,
        );
        assert!(locate(first(&document, "img")).is_none());
    }

    #[test]
    fn profile_avatar_is_never_located() {
        let document = Html::parse_document(
            r#"<article>
                 <img src="https://pbs.twimg.com/profile_images/1/me_400x400.jpg">
               </article>"#,
        );
        assert!(locate(first(&document, "img")).is_none());
    }

    #[test]
    fn profile_banner_is_never_located() {
        let document = Html::parse_document(
            r#"<article>
                 <a href="/me"><img src="https://pbs.twimg.com/profile_banners/1/1600"></a>
               </article>"#,
        );
        assert!(locate(first(&document, "img")).is_none());
    }

    #[test]
    fn non_platform_image_is_rejected() {
        let document = Html::parse_document(
            r#"<article><img src="https://example.com/cat.jpg"></article>"#,
        );
        assert!(locate(first(&document, "img")).is_none());
    }

    #[test]
    fn animated_thumbnail_substitutes_video_src() {
        let document = Html::parse_document(
            r#"<article>
                 <img src="https://pbs.twimg.com/tweet_video_thumb/ABC?format=gif&name=small">
                 <video src="https://video.twimg.com/tweet_video/ABC.mp4"></video>
               </article>"#,
        );
        let descriptor = locate(first(&document, "img")).expect("descriptor");
        assert_eq!(descriptor.media_type, MediaType::Gif);
        assert_eq!(descriptor.src, "https://video.twimg.com/tweet_video/ABC.mp4");
    }

    #[test]
    fn animated_thumbnail_uses_nested_source_element() {
        let document = Html::parse_document(
            r#"<article>
                 <img src="https://pbs.twimg.com/tweet_video_thumb/ABC?format=gif">
                 <video><source src="https://video.twimg.com/tweet_video/ABC.mp4"></video>
               </article>"#,
        );
        let descriptor = locate(first(&document, "img")).expect("descriptor");
        assert_eq!(descriptor.media_type, MediaType::Gif);
        assert_eq!(descriptor.src, "https://video.twimg.com/tweet_video/ABC.mp4");
    }

    #[test]
    fn animated_thumbnail_without_video_falls_back_to_image_url() {
        let document = Html::parse_document(
            r#"<article>
                 <img src="https://pbs.twimg.com/tweet_video_thumb/ABC?format=gif">
               </article>"#,
        );
        let descriptor = locate(first(&document, "img")).expect("descriptor");
        assert_eq!(descriptor.media_type, MediaType::Gif);
        assert_eq!(
            descriptor.src,
            "https://pbs.twimg.com/tweet_video_thumb/ABC?format=gif"
        );
    }

    #[test]
    fn wrapper_node_inside_anchor_finds_contained_image() {
        let document = Html::parse_document(
            r#"<article>
                 <a href="/status/1/photo/1">
                   <span class="overlay"></span>
                   <img src="https://pbs.twimg.com/media/DEF456.png">
                 </a>
               </article>"#,
        );
        let descriptor = locate(first(&document, "span.overlay")).expect("descriptor");
        assert_eq!(descriptor.media_type, MediaType::Image);
        assert_eq!(descriptor.src, "https://pbs.twimg.com/media/DEF456.png");
        assert_eq!(descriptor.element.value().name(), "img");
    }

    #[test]
    fn wrapper_node_without_anchor_is_rejected() {
        let document = Html::parse_document(
            r#"<article><span class="overlay"></span></article>"#,
        );
        assert!(locate(first(&document, "span.overlay")).is_none());
    }
}
