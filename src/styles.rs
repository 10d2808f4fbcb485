//! Style catalog: fixed mapping from style tags to prompt fragments.

use crate::models::LogoStyle;

pub const ALL_STYLES: [LogoStyle; 23] = [
    LogoStyle::Signature,
    LogoStyle::Mascot,
    LogoStyle::Classic,
    LogoStyle::Grunge,
    LogoStyle::TextLogo,
    LogoStyle::Minimalist,
    LogoStyle::Geometric,
    LogoStyle::Futuristic,
    LogoStyle::Elegant,
    LogoStyle::Abstract,
    LogoStyle::Corporate,
    LogoStyle::HandDrawn,
    LogoStyle::Symbolic,
    LogoStyle::Vintage,
    LogoStyle::ArtDeco,
    LogoStyle::Modern,
    LogoStyle::Monogram,
    LogoStyle::Neon,
    LogoStyle::Gradient,
    LogoStyle::Holographic,
    LogoStyle::Vibrant,
    LogoStyle::Colorful3D,
    LogoStyle::PopArt,
];

/// Prompt fragment appended for a selected style.
pub fn description(style: LogoStyle) -> &'static str {
    match style {
        LogoStyle::Signature => "Create a handwritten signature-style logo with fluid, elegant lines and natural pen strokes",
        LogoStyle::Mascot => "Design a mascot logo with a character or animal that represents the brand's personality",
        LogoStyle::Classic => "Create a timeless classic logo with balanced proportions and traditional elements",
        LogoStyle::Grunge => "Design a distressed grunge-style logo with rough textures and raw, edgy aesthetics",
        LogoStyle::TextLogo => "Create a typography-focused logo with creatively arranged letters and custom fonts",
        LogoStyle::Minimalist => "Design a minimalist logo with clean lines, simple shapes, and plenty of negative space",
        LogoStyle::Geometric => "Create a geometric logo with precise shapes, patterns, and mathematical harmony",
        LogoStyle::Futuristic => "Design a forward-thinking futuristic logo with innovative shapes and cutting-edge aesthetics",
        LogoStyle::Elegant => "Create a sophisticated elegant logo with refined typography, graceful curves, and luxurious details",
        LogoStyle::Abstract => "Minimalist abstract logo, sleek and modern design, geometric shapes, smooth curves, bold and clean lines, high contrast, simple yet unique composition, vector-based, professional and elegant, no text, no background, balanced symmetry, creative and artistic approach, harmonious color palette, futuristic and innovative feel",
        LogoStyle::Corporate => "Create a professional corporate logo with clean lines, balanced composition, and trustworthy appearance",
        LogoStyle::HandDrawn => "Design a hand-drawn logo with authentic sketched elements, organic imperfections, and artistic charm",
        LogoStyle::Symbolic => "Create a symbolic logo with meaningful iconography that represents core brand values",
        LogoStyle::Vintage => "Design a vintage logo with retro elements, nostalgic colors, and traditional craftsmanship",
        LogoStyle::ArtDeco => "Create an Art Deco style logo with geometric patterns, bold shapes, and 1920s-inspired elegance",
        LogoStyle::Modern => "Design a contemporary modern logo with current design trends and progressive aesthetics",
        LogoStyle::Monogram => "Create a monogram logo with stylized initials or letter combinations arranged in a distinctive, memorable way",
        LogoStyle::Neon => "Design a vibrant neon logo with glowing effects, bright colors, and electric luminescence that stands out on dark backgrounds",
        LogoStyle::Gradient => "Create a modern gradient logo with smooth color transitions, flowing hues, and contemporary color combinations that create depth and dimension",
        LogoStyle::Holographic => "Design a holographic style logo with iridescent colors, prismatic effects, and color-shifting elements that create a futuristic and premium appearance",
        LogoStyle::Vibrant => "Create a logo with bold, saturated colors, high contrast, and energetic elements that convey enthusiasm and excitement",
        LogoStyle::Colorful3D => "Design a three-dimensional logo with colorful elements, realistic shadows, highlights, and depth that make it pop out visually",
        LogoStyle::PopArt => "Create a pop art inspired logo with bold outlines, comic-like elements, bright colors, and retro patterns reminiscent of 1960s pop culture",
    }
}

/// Combine the user's prompt with the selected style description. The
/// original prompt is what gets persisted; this augmented form is what gets
/// submitted.
pub fn augment_prompt(prompt: &str, style: Option<LogoStyle>) -> String {
    match style {
        Some(style) => format!("{}. {}", prompt, description(style)),
        None => prompt.to_string(),
    }
}
