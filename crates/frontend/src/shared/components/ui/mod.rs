pub mod tabs;

pub use tabs::{
    use_tabs_context, SelectionMode, TabValue, Tabs, TabsContent, TabsContext, TabsList,
    TabsTrigger,
};
