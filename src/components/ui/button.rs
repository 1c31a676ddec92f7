use leptos::prelude::*;
use leptos_ui::variants;

variants! {
    Button {
        base: "inline-flex items-center justify-center gap-1 whitespace-nowrap rounded-lg text-sm font-semibold transition-all disabled:pointer-events-none disabled:opacity-50 [&_svg]:pointer-events-none [&_svg]:shrink-0 shrink-0 outline-none focus-visible:ring-2 focus-visible:ring-blue-500 hover:cursor-pointer select-none",
        variants: {
            variant: {
                Default: "bg-[#7F56D9] text-white hover:bg-[#6941C6]",
                Outline: "bg-white text-[#344054] border border-[#D0D5DD] shadow-[0_1px_2px_0px_rgba(16,24,40,0.05)] hover:bg-gray-50",
                Accent: "bg-white text-[#6941C6] border border-[#D6BBFB] shadow-[0_1px_2px_0px_rgba(16,24,40,0.05)] hover:bg-[#F9F5FF]",
                // One segment of the per-item action group.
                Segment: "rounded-none text-[#344054] hover:bg-gray-50 border-r border-gray-300 first:rounded-l-lg last:rounded-r-lg last:border-r-0",
                Ghost: "text-[#667085] hover:text-[#344054]",
            },
            size: {
                Default: "py-2.5 px-3.5",
                Sm: "px-4 py-2",
                Icon: "p-2.5",
            }
        },
        component: {
            element: button
        }
    }
}
