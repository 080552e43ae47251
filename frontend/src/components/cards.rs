use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub icon: AttrValue,
    pub title: AttrValue,
    pub description: AttrValue,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    html! {
        <div class="feature-card">
            <div class="feature-icon">{&props.icon}</div>
            <h3>{&props.title}</h3>
            <p>{&props.description}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TestimonialCardProps {
    pub content: AttrValue,
    pub author: AttrValue,
}

#[function_component(TestimonialCard)]
pub fn testimonial_card(props: &TestimonialCardProps) -> Html {
    html! {
        <blockquote class="testimonial-card">
            <div class="testimonial-stars">{"⭐⭐⭐⭐⭐"}</div>
            <p>{format!("\u{201c}{}\u{201d}", props.content)}</p>
            <footer>
                <span class="testimonial-avatar">{initials(&props.author)}</span>
                {format!("– {}", props.author)}
            </footer>
        </blockquote>
    }
}

/// "Vishal Pawar" -> "VP", at most two letters.
fn initials(author: &str) -> String {
    author
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct VideoCardProps {
    pub number: u32,
    pub title: AttrValue,
    pub description: AttrValue,
}

/// Short reel with its thumbnail as poster; the browser's own controls
/// handle playback.
#[function_component(VideoCard)]
pub fn video_card(props: &VideoCardProps) -> Html {
    html! {
        <div class="video-card">
            <video
                src={format!("/reels{}.mp4", props.number)}
                poster={format!("/reels{}-thumbnail.jpg", props.number)}
                preload="metadata"
                controls={true}
                muted={true}
                playsinline={true}
            />
            <h4>{&props.title}</h4>
            <p>{&props.description}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::initials;

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(initials("Vishal Pawar"), "VP");
        assert_eq!(initials("Sridharan  Krishnamoorthi Iyer"), "SK");
        assert_eq!(initials("Madhu"), "M");
        assert_eq!(initials(""), "");
    }
}
